// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for routes, wire field names, limits, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list so that call sites read as `endpoints::SUMMARY` or
//! `entry_fields::COOK_TIME`.

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the HTTP server binary and tracing service
    pub const COOKBOOK_SERVER: &str = "cookbook-server";
}

/// API endpoints
pub mod endpoints {
    /// Name normalization endpoint
    pub const PARSE: &str = "/parse";
    /// Entry creation endpoint
    pub const ENTRY: &str = "/entry";
    /// Recipe summary endpoint
    pub const SUMMARY: &str = "/summary";
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
}

/// Field names of the entry creation wire format
pub mod entry_fields {
    /// Entry discriminator (`"ingredient"` or `"recipe"`)
    pub const TYPE: &str = "type";
    /// Raw entry name, also the catalogue key
    pub const NAME: &str = "name";
    /// Ingredient preparation cost
    pub const COOK_TIME: &str = "cookTime";
    /// Recipe requirement list
    pub const REQUIRED_ITEMS: &str = "requiredItems";
    /// Required item multiplicity
    pub const QUANTITY: &str = "quantity";
}

/// Values accepted for the entry `type` field
pub mod entry_types {
    /// Atomic ingredient
    pub const INGREDIENT: &str = "ingredient";
    /// Composite recipe
    pub const RECIPE: &str = "recipe";
}
