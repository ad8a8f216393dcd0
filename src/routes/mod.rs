// ABOUTME: Route module organization for the cookbook server HTTP endpoints
// ABOUTME: Groups catalogue routes and health routes, each exposing a Router constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the cookbook server
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the `cookbook` layer.

/// Catalogue routes: name parsing, entry creation, and recipe summaries
pub mod cookbook;
/// Health check and readiness routes
pub mod health;

pub use cookbook::CookbookRoutes;
pub use health::HealthRoutes;
