// ABOUTME: Route handlers for the cookbook catalogue API
// ABOUTME: Exposes name parsing, entry creation, and recipe summary endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalogue routes
//!
//! Every rejection is returned as an [`AppError`], which renders as the
//! standard JSON error envelope with status 400.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use cookbook_core::constants::endpoints;
use cookbook_core::errors::{AppError, ErrorCode};
use cookbook_core::models::RecipeSummary;
use cookbook_core::names::normalize_name;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::cookbook::{create_entry, summarize_with_limits};
use crate::middleware::REQUEST_ID_HEADER;
use crate::resources::ServerResources;

/// Body of `POST /parse`
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Raw name; absent is treated as empty
    #[serde(default)]
    pub input: String,
}

/// Response of `POST /parse`
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResponse {
    /// Normalized name
    pub msg: String,
}

/// Query of `GET /summary`
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Raw catalogue key of the recipe
    pub name: Option<String>,
}

/// Cookbook routes implementation
pub struct CookbookRoutes;

impl CookbookRoutes {
    /// Create all catalogue routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::PARSE, post(Self::handle_parse))
            .route(endpoints::ENTRY, post(Self::handle_create_entry))
            .route(endpoints::SUMMARY, get(Self::handle_summary))
            .with_state(resources)
    }

    async fn handle_parse(
        headers: HeaderMap,
        Json(request): Json<ParseRequest>,
    ) -> Result<Json<ParseResponse>, AppError> {
        normalize_name(&request.input)
            .map(|msg| Json(ParseResponse { msg }))
            .ok_or_else(|| {
                with_request_id(
                    AppError::invalid_input("input does not contain a usable name"),
                    &headers,
                )
            })
    }

    async fn handle_create_entry(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Result<Json<Value>, AppError> {
        create_entry(&resources.store, &body)
            .map_err(|e| with_request_id(AppError::from(e), &headers))?;

        Ok(Json(json!({})))
    }

    async fn handle_summary(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<SummaryQuery>,
    ) -> Result<Json<RecipeSummary>, AppError> {
        let name = query.name.filter(|name| !name.is_empty()).ok_or_else(|| {
            with_request_id(
                AppError::new(
                    ErrorCode::MissingRequiredField,
                    "query parameter 'name' is required",
                ),
                &headers,
            )
        })?;

        // Expansion is CPU-bound; keep it off the async workers
        let store = resources.store.clone();
        let limits = resources.expansion_limits();
        let key = name.clone();
        let summary = tokio::task::spawn_blocking(move || {
            summarize_with_limits(&store, &key, limits)
        })
        .await
        .map_err(|e| {
            with_request_id(
                AppError::internal("recipe expansion did not complete").with_source(e),
                &headers,
            )
        })?
        .map_err(|e| with_request_id(AppError::from(e), &headers))?;

        info!(
            recipe = %name,
            cook_time = summary.cook_time,
            ingredients = summary.ingredients.len(),
            "Recipe summary served"
        );

        Ok(Json(summary))
    }
}

fn with_request_id(error: AppError, headers: &HeaderMap) -> AppError {
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(request_id) => error.with_request_id(request_id),
        None => error,
    }
}
