// ABOUTME: HTTP middleware for request tracing, request IDs, and CORS
// ABOUTME: Layers applied to every cookbook route by the server router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request ID and span creation
pub mod request_tracing;

pub use cors::setup_cors;
pub use request_tracing::{create_request_span, request_id_layers, REQUEST_ID_HEADER};
