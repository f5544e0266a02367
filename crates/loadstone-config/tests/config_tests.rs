// SPDX-FileCopyrightText: 2026 Loadstone Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Loadstone configuration system.

use loadstone_config::diagnostic::{suggest_key, ConfigError};
use loadstone_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_loadstone_config() {
    let toml = r#"
[log]
level = "debug"

[output]
color = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.log.level, "debug");
    assert!(!config.output.color);
}

/// Empty TOML yields the compiled defaults.
#[test]
fn empty_toml_yields_defaults() {
    let config = load_config_from_str("").expect("empty TOML should deserialize");
    assert_eq!(config.log.level, "warn");
    assert!(config.output.color);
}

/// A partial section keeps defaults for the omitted fields.
#[test]
fn partial_section_keeps_defaults() {
    let toml = r#"
[log]
level = "trace"
"#;
    let config = load_config_from_str(toml).unwrap();
    assert_eq!(config.log.level, "trace");
    assert!(config.output.color);
}

/// An unknown key in [log] produces an UnknownKey diagnostic with a
/// fuzzy-match suggestion.
#[test]
fn unknown_key_produces_suggestion() {
    let toml = r#"
[log]
levl = "debug"
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion, .. }
            if key == "levl" && suggestion.as_deref() == Some("level")
    )));
}

/// An unknown top-level section is rejected.
#[test]
fn unknown_section_is_rejected() {
    let toml = r#"
[logging]
level = "debug"
"#;
    let result = load_and_validate_str(toml);
    assert!(result.is_err());
}

/// A wrong value type produces a diagnostic rather than a panic.
#[test]
fn wrong_type_produces_error() {
    let toml = r#"
[output]
color = "yes"
"#;
    let result = load_and_validate_str(toml);
    assert!(result.is_err());
}

/// An invalid log level passes deserialization but fails validation.
#[test]
fn invalid_log_level_fails_validation() {
    let toml = r#"
[log]
level = "verbose"
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("log.level")
    )));
}

/// `deny_unknown_fields` holds at the serde level, independent of figment.
#[test]
fn unknown_key_is_rejected_by_serde_directly() {
    let toml_str = r#"
[log]
level = "info"
format = "json"
"#;
    let result = toml::from_str::<loadstone_config::LoadstoneConfig>(toml_str);
    assert!(result.is_err());
}

/// suggest_key is exercised end to end by the diagnostics above; sanity
/// check its threshold behavior directly.
#[test]
fn suggest_key_threshold() {
    assert_eq!(
        suggest_key("colr", &["color", "level"]),
        Some("color".to_string())
    );
    assert_eq!(suggest_key("qqqq", &["color", "level"]), None);
}
