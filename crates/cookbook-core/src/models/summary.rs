// ABOUTME: Recipe summary model returned by the expansion engine
// ABOUTME: Holds total cook time and per-ingredient quantities sorted by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Total quantity of one ingredient in an expanded recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    /// Ingredient display name
    pub name: String,
    /// Units required for one unit of the summarized recipe
    pub quantity: u64,
}

/// Flattened ingredient list and total cook time of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    /// Display name of the summarized recipe
    pub name: String,
    /// Sum of `quantity * cookTime` over every ingredient
    pub cook_time: u64,
    /// Ingredients sorted lexicographically by name
    pub ingredients: Vec<IngredientQuantity>,
}

impl RecipeSummary {
    /// Build a summary from accumulated ingredient counts
    ///
    /// `BTreeMap` iteration order is the codepoint order of the names, which
    /// is the ordering clients rely on.
    #[must_use]
    pub fn from_counts(name: String, cook_time: u64, counts: BTreeMap<String, u64>) -> Self {
        Self {
            name,
            cook_time,
            ingredients: counts
                .into_iter()
                .map(|(name, quantity)| IngredientQuantity { name, quantity })
                .collect(),
        }
    }

    /// Quantity of a named ingredient, if present
    #[must_use]
    pub fn quantity_of(&self, ingredient: &str) -> Option<u64> {
        self.ingredients
            .iter()
            .find(|entry| entry.name == ingredient)
            .map(|entry| entry.quantity)
    }
}
