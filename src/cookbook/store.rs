// ABOUTME: Concurrent in-memory catalogue of ingredients and recipes keyed by raw name
// ABOUTME: Provides atomic check-then-insert so duplicate names can never both succeed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cookbook_core::errors::CookbookError;
use cookbook_core::models::Entity;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// Process-lifetime catalogue of entities
///
/// Cloning is cheap and every clone shares the same map. Entities are
/// immutable once inserted and handed out as `Arc` snapshots, so no lookup
/// holds a shard lock beyond the call that made it.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    entries: Arc<DashMap<String, Arc<Entity>>>,
}

impl EntityStore {
    /// Create an empty catalogue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entity by its raw key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<Entity>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Whether an entity exists under this raw key
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a fully built entity under its raw key
    ///
    /// The absence check and the insertion happen under the same shard lock.
    ///
    /// # Errors
    ///
    /// Returns [`CookbookError::DuplicateName`] if the key is already taken,
    /// including when another writer claimed it after the caller's own check.
    pub fn insert(&self, key: impl Into<String>, entity: Entity) -> Result<(), CookbookError> {
        match self.entries.entry(key.into()) {
            Entry::Occupied(occupied) => Err(CookbookError::DuplicateName {
                name: occupied.key().clone(),
            }),
            Entry::Vacant(vacant) => {
                vacant.insert(Arc::new(entity));
                Ok(())
            }
        }
    }

    /// Number of entities in the catalogue
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
