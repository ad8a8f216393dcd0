// ABOUTME: Catalogue-specific error types for entry validation and recipe expansion
// ABOUTME: Provides structured errors that convert into the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cookbook Error Types
//!
//! Every failure of the catalogue is local and recoverable by resubmitting
//! corrected input. None of them leave partial state behind.

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised while validating entries or expanding recipes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CookbookError {
    /// The request body is not an object, or a name cannot be normalized
    #[error("malformed request: {reason}")]
    Malformed {
        /// What was wrong with the request
        reason: String,
    },
    /// A required field is absent
    #[error("missing required field '{field}'")]
    MissingField {
        /// Wire name of the missing field
        field: &'static str,
    },
    /// A field is present but has the wrong type or value
    #[error("invalid field '{field}': {reason}")]
    InvalidField {
        /// Wire name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
    /// The entry `type` is neither ingredient nor recipe
    #[error("unknown entry type '{entry_type}'")]
    UnknownEntryType {
        /// The rejected type value
        entry_type: String,
    },
    /// An entry with this key already exists
    #[error("entry '{name}' already exists")]
    DuplicateName {
        /// The conflicting key
        name: String,
    },
    /// The same item appears twice in one recipe's requirement list
    #[error("required item '{item}' is listed more than once")]
    DuplicateRequiredItem {
        /// The repeated item name
        item: String,
    },
    /// No entry exists under the requested key
    #[error("entry '{name}' not found")]
    UnknownEntry {
        /// The requested key
        name: String,
    },
    /// The requested entry is an ingredient
    #[error("entry '{name}' is not a recipe")]
    NotARecipe {
        /// The requested key
        name: String,
    },
    /// A recipe requires an entry that was never created
    #[error("recipe '{recipe}' requires missing item '{item}'")]
    MissingReference {
        /// Key of the recipe holding the dangling reference
        recipe: String,
        /// The unresolved item name
        item: String,
    },
    /// A recipe transitively requires itself
    #[error("cyclic composition detected: {}", path.join(" -> "))]
    CyclicComposition {
        /// Keys forming the cycle, first and last element are equal
        path: Vec<String>,
    },
    /// Recipe nesting exceeds the configured depth limit
    #[error("recipe nesting exceeds the maximum depth of {max_depth}")]
    ExpansionTooDeep {
        /// The configured limit
        max_depth: usize,
    },
    /// Multiplied quantities or cook times do not fit in 64 bits
    #[error("quantity overflow while expanding '{recipe}'")]
    QuantityOverflow {
        /// Key of the recipe being expanded
        recipe: String,
    },
}

impl CookbookError {
    /// Create a "malformed" error
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    /// Create an "invalid field" error
    #[must_use]
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Get the error code reported to clients
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Malformed { .. } | Self::UnknownEntryType { .. } => ErrorCode::InvalidInput,
            Self::MissingField { .. } => ErrorCode::MissingRequiredField,
            Self::InvalidField { .. } => ErrorCode::InvalidFormat,
            Self::ExpansionTooDeep { .. } | Self::QuantityOverflow { .. } => {
                ErrorCode::ValueOutOfRange
            }
            Self::DuplicateName { .. } => ErrorCode::ResourceAlreadyExists,
            Self::DuplicateRequiredItem { .. } => ErrorCode::DuplicateRequiredItem,
            Self::UnknownEntry { .. } => ErrorCode::ResourceNotFound,
            Self::NotARecipe { .. } => ErrorCode::NotARecipe,
            Self::MissingReference { .. } => ErrorCode::MissingReference,
            Self::CyclicComposition { .. } => ErrorCode::CyclicComposition,
        }
    }
}

impl From<CookbookError> for AppError {
    fn from(error: CookbookError) -> Self {
        let code = error.code();
        let message = error.to_string();
        let app_error = Self::new(code, message);

        match error {
            CookbookError::DuplicateName { name }
            | CookbookError::UnknownEntry { name }
            | CookbookError::NotARecipe { name } => app_error.with_resource_id(name),
            CookbookError::MissingReference { recipe, item } => app_error
                .with_resource_id(recipe)
                .with_details(serde_json::json!({ "item": item })),
            CookbookError::CyclicComposition { path } => {
                app_error.with_details(serde_json::json!({ "cycle": path }))
            }
            _ => app_error,
        }
    }
}
