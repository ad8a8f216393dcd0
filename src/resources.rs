// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Bundles the catalogue store with the loaded server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::cookbook::{EntityStore, ExpansionLimits};

/// Resources shared across handlers behind an `Arc`
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// In-memory catalogue
    pub store: EntityStore,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create resources with an empty catalogue
    #[must_use]
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            store: EntityStore::new(),
            config,
        }
    }

    /// Limits applied to every summary request
    #[must_use]
    pub fn expansion_limits(&self) -> ExpansionLimits {
        self.config.expansion.limits()
    }
}
