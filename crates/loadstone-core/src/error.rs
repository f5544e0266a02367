// SPDX-FileCopyrightText: 2026 Loadstone Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Loadstone framework.

use thiserror::Error;

/// The primary error type used across Loadstone crates.
#[derive(Debug, Error)]
pub enum LoadstoneError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// An exact plugin lookup found nothing in the registry.
    #[error("plugin not found: {platform}/{name}")]
    PluginNotFound { name: String, platform: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
