// ABOUTME: Main library entry point for the cookbook catalogue server
// ABOUTME: Exposes catalogue storage, recipe expansion, and the axum HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cookbook Server
//!
//! An in-memory catalogue of ingredients and recipes. Recipes are built
//! from ingredients and other recipes; the server flattens any recipe into
//! the sorted list of ingredients it needs and its total cook time.
//!
//! ## Architecture
//!
//! - **`cookbook_core`**: errors, entity models, name normalization, constants
//! - **Cookbook**: concurrent store, entry validation, and recipe expansion
//! - **Routes**: thin axum handlers over the cookbook layer
//! - **Config / Logging**: environment-driven settings and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cookbook_server::config::ServerConfig;
//! use cookbook_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Cookbook server configured for {}", config.bind_address());
//!     Ok(())
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// Catalogue store, entry validation, and recipe expansion
pub mod cookbook;

/// Logging configuration and initialization
pub mod logging;

/// HTTP middleware layers
pub mod middleware;

/// Shared handler resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

pub use cookbook_core::{constants, errors, models, names};
