// SPDX-FileCopyrightText: 2026 Loadstone Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./loadstone.toml` >
//! `~/.config/loadstone/loadstone.toml` > `/etc/loadstone/loadstone.toml`,
//! with environment variable overrides via the `LOADSTONE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::LoadstoneConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/loadstone/loadstone.toml` (system-wide)
/// 3. `~/.config/loadstone/loadstone.toml` (user XDG config)
/// 4. `./loadstone.toml` (local directory)
/// 5. `LOADSTONE_*` environment variables
pub fn load_config() -> Result<LoadstoneConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LoadstoneConfig::default()))
        .merge(Toml::file("/etc/loadstone/loadstone.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("loadstone/loadstone.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("loadstone.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<LoadstoneConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LoadstoneConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LoadstoneConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LoadstoneConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider.
///
/// Uses `Env::map()` rather than `Env::split("_")` so section-to-key
/// mapping stays unambiguous: `LOADSTONE_LOG_LEVEL` maps to `log.level`
/// and `LOADSTONE_OUTPUT_COLOR` to `output.color`.
fn env_provider() -> Env {
    Env::prefixed("LOADSTONE_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("log_", "log.", 1)
            .replacen("output_", "output.", 1);
        mapped.into()
    })
}
