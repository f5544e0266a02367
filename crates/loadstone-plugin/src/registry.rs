// SPDX-FileCopyrightText: 2026 Loadstone Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry: the queryable snapshot of all registered plugins.
//!
//! The registry stores trait objects in registration order. That order is
//! the "native ordering" the CLI presenter reproduces; nothing downstream
//! re-sorts it. Identity is the `(name, platform)` pair.

use std::sync::Arc;

use loadstone_core::LoadstoneError;

use crate::plugin::Plugin;

/// Registry of all plugins known to this process.
///
/// Must be populated (see [`crate::catalog::builtin_registry`]) before any
/// inspection query runs.
pub struct PluginRegistry {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Register a plugin, keeping registration order.
    ///
    /// A duplicate `(name, platform)` pair replaces the earlier registration
    /// in place, so the registry never holds two plugins with one identity.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) {
        if let Some(existing) = self
            .plugins
            .iter_mut()
            .find(|p| p.name() == plugin.name() && p.platform() == plugin.platform())
        {
            tracing::warn!(
                name = plugin.name(),
                platform = plugin.platform(),
                "replacing duplicate plugin registration"
            );
            *existing = plugin;
        } else {
            tracing::debug!(
                name = plugin.name(),
                platform = plugin.platform(),
                base = %plugin.base(),
                "registering plugin"
            );
            self.plugins.push(plugin);
        }
    }

    /// All plugins, optionally narrowed to one platform (exact equality).
    ///
    /// `None` returns every plugin across all platforms, in registration
    /// order.
    pub fn get_all(&self, platform: Option<&str>) -> Vec<Arc<dyn Plugin>> {
        self.plugins
            .iter()
            .filter(|p| platform.is_none_or(|ns| p.platform() == ns))
            .cloned()
            .collect()
    }

    /// Exact lookup by `(name, platform)`.
    pub fn get(&self, name: &str, platform: &str) -> Result<Arc<dyn Plugin>, LoadstoneError> {
        self.plugins
            .iter()
            .find(|p| p.name() == name && p.platform() == platform)
            .cloned()
            .ok_or_else(|| LoadstoneError::PluginNotFound {
                name: name.to_string(),
                platform: platform.to_string(),
            })
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
