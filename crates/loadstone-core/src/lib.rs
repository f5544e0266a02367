// SPDX-FileCopyrightText: 2026 Loadstone Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Loadstone framework.
//!
//! Provides the error type and common types used throughout the Loadstone
//! workspace. The plugin trait itself lives in `loadstone-plugin`.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::LoadstoneError;
pub use types::PluginBase;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loadstone_error_has_all_variants() {
        let _config = LoadstoneError::Config("test".into());
        let _not_found = LoadstoneError::PluginNotFound {
            name: "constant".into(),
            platform: "generic".into(),
        };
        let _internal = LoadstoneError::Internal("test".into());
    }

    #[test]
    fn plugin_not_found_message_names_platform_and_name() {
        let err = LoadstoneError::PluginNotFound {
            name: "constant".into(),
            platform: "generic".into(),
        };
        assert_eq!(err.to_string(), "plugin not found: generic/constant");
    }

    #[test]
    fn plugin_base_display_round_trips() {
        use std::str::FromStr;

        let variants = [
            PluginBase::Scenario,
            PluginBase::Runner,
            PluginBase::Context,
            PluginBase::Hook,
        ];

        for variant in &variants {
            let s = variant.to_string();
            let parsed = PluginBase::from_str(&s).expect("should parse back");
            assert_eq!(*variant, parsed);
        }
    }

    #[test]
    fn plugin_base_display_is_case_sensitive_on_parse() {
        use std::str::FromStr;

        assert!(PluginBase::from_str("Scenario").is_ok());
        assert!(PluginBase::from_str("scenario").is_err());
    }

    #[test]
    fn plugin_base_serialization() {
        let base = PluginBase::Runner;
        let json = serde_json::to_string(&base).expect("should serialize");
        let parsed: PluginBase = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(base, parsed);
    }
}
