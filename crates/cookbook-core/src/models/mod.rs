// ABOUTME: Core data models for the cookbook catalogue
// ABOUTME: Re-exports catalogue entities and expansion summary types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - **entry**: `Entity` (ingredient or recipe) and its parts
//! - **summary**: the flattened result of expanding a recipe

/// Catalogue entities
pub mod entry;
/// Recipe expansion summaries
pub mod summary;

pub use entry::{Entity, EntryKind, Ingredient, Recipe, RequiredItem};
pub use summary::{IngredientQuantity, RecipeSummary};
