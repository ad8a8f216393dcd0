// ABOUTME: Catalogue entity models for ingredients, recipes, and required items
// ABOUTME: Defines the closed Entity sum type shared by validation and expansion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::fmt;

use crate::constants::entry_types;

/// Atomic catalogue entry with a fixed preparation cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Display name
    pub name: String,
    /// Preparation cost of one unit
    pub cook_time: u64,
}

/// One `(name, quantity)` requirement of a recipe
///
/// `name` is the raw catalogue key of the required entry, not its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredItem {
    /// Raw key of the required entry
    pub name: String,
    /// Units required, always at least one
    pub quantity: u64,
}

/// Composite catalogue entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Display name
    pub name: String,
    /// Requirements in submission order, names unique
    pub required_items: Vec<RequiredItem>,
}

/// A catalogue entry: either an ingredient or a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entity {
    /// Atomic entry
    Ingredient(Ingredient),
    /// Composite entry
    Recipe(Recipe),
}

impl Entity {
    /// Display name of the entry
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Ingredient(ingredient) => &ingredient.name,
            Self::Recipe(recipe) => &recipe.name,
        }
    }

    /// Which kind of entry this is
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::Ingredient(_) => EntryKind::Ingredient,
            Self::Recipe(_) => EntryKind::Recipe,
        }
    }

    /// Borrow the recipe, if this entry is one
    #[must_use]
    pub const fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            Self::Recipe(recipe) => Some(recipe),
            Self::Ingredient(_) => None,
        }
    }

    /// Direct requirements of this entry; ingredients have none
    #[must_use]
    pub fn required_items(&self) -> &[RequiredItem] {
        match self {
            Self::Recipe(recipe) => &recipe.required_items,
            Self::Ingredient(_) => &[],
        }
    }
}

impl From<Ingredient> for Entity {
    fn from(ingredient: Ingredient) -> Self {
        Self::Ingredient(ingredient)
    }
}

impl From<Recipe> for Entity {
    fn from(recipe: Recipe) -> Self {
        Self::Recipe(recipe)
    }
}

/// Entry discriminator as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Atomic entry
    Ingredient,
    /// Composite entry
    Recipe,
}

impl EntryKind {
    /// Parse a wire `type` value
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            entry_types::INGREDIENT => Some(Self::Ingredient),
            entry_types::RECIPE => Some(Self::Recipe),
            _ => None,
        }
    }

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ingredient => entry_types::INGREDIENT,
            Self::Recipe => entry_types::RECIPE,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
