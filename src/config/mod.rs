// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Loads network, CORS, and expansion limits from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the cookbook server
//!
//! All configuration comes from environment variables; there is no config
//! file. Command-line flags of the server binary override individual values.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, ExpansionConfig, ServerConfig};
