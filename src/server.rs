// ABOUTME: HTTP server assembly and lifecycle for the cookbook service
// ABOUTME: Builds the axum router with middleware layers and serves it until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{body::Body, http::Request, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::middleware::{create_request_span, request_id_layers, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{CookbookRoutes, HealthRoutes};

/// Build the full application router
///
/// The request ID is assigned before the trace span is created so every
/// log line of a request carries it.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let (set_request_id, propagate_request_id) = request_id_layers();
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(CookbookRoutes::routes(Arc::clone(&resources)))
        .merge(HealthRoutes::routes(resources))
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id)
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request<Body>| create_request_span(request)),
                )
                .layer(propagate_request_id)
                .layer(cors),
        )
}

/// Bind the configured address and serve until Ctrl+C
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let resources = Arc::new(ServerResources::new(Arc::new(config)));
    let address = resources.config.bind_address();
    let app = build_router(Arc::clone(&resources));

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(address = %address, "Cookbook server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated with an error")?;

    info!(entries = resources.store.len(), "Cookbook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal; serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
