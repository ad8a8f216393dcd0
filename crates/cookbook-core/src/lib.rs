// ABOUTME: Core types and constants for the cookbook catalogue server
// ABOUTME: Foundation crate with error handling, entity models, name normalization, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cookbook Core
//!
//! Foundation crate providing shared types and constants for the cookbook
//! server. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the
//!   `CookbookError` domain error
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Catalogue entities (ingredients, recipes) and expansion summaries
//! - **names**: Free-text name normalization

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Entity, Ingredient, Recipe, RecipeSummary)
pub mod models;

/// Canonical display-name normalization
pub mod names;
