// ABOUTME: Server binary for the cookbook catalogue and recipe expansion API
// ABOUTME: Loads configuration, initializes logging, and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cookbook Server Binary
//!
//! Starts the in-memory cookbook catalogue behind its HTTP API.

use anyhow::Result;
use clap::Parser;
use cookbook_server::{config::ServerConfig, logging, server};
use tracing::{error, info};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "cookbook-server")]
#[command(about = "Cookbook catalogue API - ingredients, recipes, and flattened summaries")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    logging::init_from_env()?;

    info!("Starting Cookbook Server");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = server::run(config).await {
        error!(error = %e, "Server error");
        return Err(e);
    }

    Ok(())
}

fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());
    info!("=== Available Endpoints ===");
    info!("  Parse Name:      POST {base}/parse");
    info!("  Create Entry:    POST {base}/entry");
    info!("  Recipe Summary:  GET  {base}/summary?name=<recipe>");
    info!("  Health:          GET  {base}/health");
    info!("  Readiness:       GET  {base}/ready");
    info!("=== End of Endpoint List ===");
}
