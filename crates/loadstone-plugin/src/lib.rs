// SPDX-FileCopyrightText: 2026 Loadstone Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin trait, registry, and built-in plugin catalog.
//!
//! Loadstone extension units (scenarios, runners, contexts, hooks) implement
//! the [`Plugin`] trait and are registered in a [`PluginRegistry`] keyed by
//! `(name, platform)`. The registry is the single snapshot the inspection
//! CLI queries.

pub mod catalog;
pub mod plugin;
pub mod registry;

pub use catalog::builtin_registry;
pub use plugin::{Plugin, PluginInfo, PluginParameter};
pub use registry::PluginRegistry;
