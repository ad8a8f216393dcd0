// ABOUTME: Recipe catalogue module with storage, entry validation, and recipe expansion
// ABOUTME: Owns the only mutation path into the catalogue and the flattening traversal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cookbook Module
//!
//! A catalogue of ingredients and composite recipes, and the engine that
//! flattens a recipe into the atomic ingredients it needs.
//!
//! ## Flow
//!
//! - Writes: raw JSON entry -> [`validation::validate_entry`] -> [`EntityStore::insert`]
//! - Reads: recipe key -> [`expansion::summarize`] against the same store
//!
//! ## Keys and display names
//!
//! The store is keyed by the raw `name` submitted with an entry, and recipes
//! reference their requirements by those raw keys. The normalized display
//! name lives on the entity and is what summaries report.

/// Recipe expansion into flattened ingredient summaries
pub mod expansion;
/// Concurrent in-memory catalogue
pub mod store;
/// Entry validation and creation
pub mod validation;

pub use expansion::{summarize, summarize_with_limits, ExpansionLimits};
pub use store::EntityStore;
pub use validation::{create_entry, validate_entry, ValidatedEntry};
