// ABOUTME: Entry validation turning raw JSON creation requests into catalogue entities
// ABOUTME: Enforces field presence, numeric ranges, unique names, and unique required items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Entry validation
//!
//! Validation works on the raw JSON value rather than a typed request so
//! that each failure reports the exact field at fault (missing versus wrong
//! type). Nothing touches the store until an entity is fully built.

use cookbook_core::constants::entry_fields;
use cookbook_core::errors::CookbookError;
use cookbook_core::models::{Entity, EntryKind, Ingredient, Recipe, RequiredItem};
use cookbook_core::names::display_name_or_raw;
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::{debug, info};

use super::store::EntityStore;

/// An entity ready to be inserted, paired with its raw catalogue key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEntry {
    /// Raw `name` exactly as submitted
    pub key: String,
    /// The entity to store
    pub entity: Entity,
}

/// Validate a raw creation request against the current catalogue
///
/// # Errors
///
/// Returns the first [`CookbookError`] found: a non-object body, a missing
/// `type` or `name`, a name that is already a key, an unknown `type`, or an
/// invalid ingredient/recipe payload.
pub fn validate_entry(
    store: &EntityStore,
    request: &Value,
) -> Result<ValidatedEntry, CookbookError> {
    let fields = request
        .as_object()
        .ok_or_else(|| CookbookError::malformed("entry must be a JSON object"))?;

    let entry_type = required(fields, entry_fields::TYPE)?;
    let name = required(fields, entry_fields::NAME)?
        .as_str()
        .ok_or_else(|| CookbookError::invalid_field(entry_fields::NAME, "must be a string"))?;

    if store.contains(name) {
        return Err(CookbookError::DuplicateName {
            name: name.to_owned(),
        });
    }

    let kind = entry_type
        .as_str()
        .and_then(EntryKind::from_wire)
        .ok_or_else(|| CookbookError::UnknownEntryType {
            entry_type: entry_type
                .as_str()
                .map_or_else(|| entry_type.to_string(), ToOwned::to_owned),
        })?;

    let entity = match kind {
        EntryKind::Ingredient => build_ingredient(name, fields)?,
        EntryKind::Recipe => build_recipe(name, fields)?,
    };

    Ok(ValidatedEntry {
        key: name.to_owned(),
        entity,
    })
}

/// Validate a creation request and insert the resulting entity
///
/// This is the only mutation path into the catalogue.
///
/// # Errors
///
/// Returns any validation error from [`validate_entry`], or
/// [`CookbookError::DuplicateName`] when a concurrent writer claimed the
/// same key between validation and insertion.
pub fn create_entry(store: &EntityStore, request: &Value) -> Result<ValidatedEntry, CookbookError> {
    let validated = validate_entry(store, request).inspect_err(|error| {
        debug!(%error, "Rejected catalogue entry");
    })?;

    store
        .insert(validated.key.clone(), validated.entity.clone())
        .inspect_err(|error| debug!(%error, "Lost race inserting catalogue entry"))?;

    info!(
        key = %validated.key,
        display_name = %validated.entity.name(),
        kind = %validated.entity.kind(),
        "Catalogue entry created"
    );

    Ok(validated)
}

fn required<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, CookbookError> {
    fields
        .get(field)
        .ok_or(CookbookError::MissingField { field })
}

fn build_ingredient(name: &str, fields: &Map<String, Value>) -> Result<Entity, CookbookError> {
    let cook_time = required(fields, entry_fields::COOK_TIME)?;
    let cook_time = cook_time.as_u64().ok_or_else(|| {
        CookbookError::invalid_field(
            entry_fields::COOK_TIME,
            format!("must be a non-negative integer, got {cook_time}"),
        )
    })?;

    Ok(Ingredient {
        name: display_name_or_raw(name),
        cook_time,
    }
    .into())
}

fn build_recipe(name: &str, fields: &Map<String, Value>) -> Result<Entity, CookbookError> {
    let items = required(fields, entry_fields::REQUIRED_ITEMS)?
        .as_array()
        .ok_or_else(|| {
            CookbookError::invalid_field(entry_fields::REQUIRED_ITEMS, "must be an array")
        })?;

    let mut seen = HashSet::with_capacity(items.len());
    let mut required_items = Vec::with_capacity(items.len());

    for item in items {
        let item = parse_required_item(item)?;
        if !seen.insert(item.name.clone()) {
            return Err(CookbookError::DuplicateRequiredItem { item: item.name });
        }
        required_items.push(item);
    }

    Ok(Recipe {
        name: display_name_or_raw(name),
        required_items,
    }
    .into())
}

fn parse_required_item(item: &Value) -> Result<RequiredItem, CookbookError> {
    let fields = item.as_object().ok_or_else(|| {
        CookbookError::invalid_field(entry_fields::REQUIRED_ITEMS, "items must be JSON objects")
    })?;

    let name = required(fields, entry_fields::NAME)?
        .as_str()
        .ok_or_else(|| CookbookError::invalid_field(entry_fields::NAME, "must be a string"))?;

    let quantity = required(fields, entry_fields::QUANTITY)?;
    let quantity = quantity
        .as_u64()
        .filter(|quantity| *quantity > 0)
        .ok_or_else(|| {
            CookbookError::invalid_field(
                entry_fields::QUANTITY,
                format!("must be a positive integer, got {quantity}"),
            )
        })?;

    Ok(RequiredItem {
        name: name.to_owned(),
        quantity,
    })
}
