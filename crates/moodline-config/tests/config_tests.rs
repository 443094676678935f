// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Moodline configuration system.

use moodline_config::diagnostic::ConfigError;
use moodline_config::model::{MoodlineConfig, ResponderProfileName};
use moodline_config::{load_and_validate_str, load_config_from_str};

/// A fully specified file deserializes into every section.
#[test]
fn valid_toml_deserializes_into_moodline_config() {
    let toml = r#"
[app]
name = "journal-backend"
log_level = "debug"

[generative]
api_key = "fw-123"
base_url = "http://localhost:9000/v1"
model = "test-model"
sentiment_temperature = 0.0
response_temperature = 1.0
max_tokens = 256
crisis_max_tokens = 128
request_timeout_secs = 30

[hosted]
api_key = "hf-abc"
api_url = "http://localhost:9001/classify"
timeout_secs = 3

[lexicon]
score_divisor = 10.0

[responder]
profile = "companion"
seed = 42

[gateway]
host = "0.0.0.0"
port = 8080
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.name, "journal-backend");
    assert_eq!(config.app.log_level, "debug");
    assert_eq!(config.generative.api_key.as_deref(), Some("fw-123"));
    assert_eq!(config.generative.base_url, "http://localhost:9000/v1");
    assert_eq!(config.generative.model, "test-model");
    assert_eq!(config.generative.max_tokens, 256);
    assert_eq!(config.generative.crisis_max_tokens, 128);
    assert_eq!(config.generative.request_timeout_secs, Some(30));
    assert_eq!(config.hosted.api_key.as_deref(), Some("hf-abc"));
    assert_eq!(config.hosted.timeout_secs, 3);
    assert_eq!(config.lexicon.score_divisor, 10.0);
    assert_eq!(config.responder.profile, ResponderProfileName::Companion);
    assert_eq!(config.responder.seed, Some(42));
    assert_eq!(config.gateway.host, "0.0.0.0");
    assert_eq!(config.gateway.port, 8080);
}

/// An empty file yields the compiled defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_and_validate_str("").expect("defaults should validate");
    assert_eq!(config.app.name, "moodline");
    assert!(config.generative.api_key.is_none());
    assert_eq!(config.generative.model, "accounts/fireworks/models/gpt-oss-20b");
    assert_eq!(config.generative.sentiment_temperature, 0.1);
    assert_eq!(config.generative.response_temperature, 0.7);
    assert_eq!(config.generative.max_tokens, 1024);
    assert_eq!(config.generative.crisis_max_tokens, 800);
    assert!(config.generative.request_timeout_secs.is_none());
    assert_eq!(config.hosted.timeout_secs, 10);
    assert_eq!(config.lexicon.score_divisor, 5.0);
    assert_eq!(config.responder.profile, ResponderProfileName::Journal);
    assert!(config.responder.seed.is_none());
    assert_eq!(config.gateway.port, 3000);
}

/// Unknown field in a section is rejected with a suggestion.
#[test]
fn unknown_field_in_generative_produces_suggestion() {
    let toml = r#"
[generative]
modle = "x"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "modle");
            assert_eq!(suggestion.as_deref(), Some("model"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// Unknown top-level section is rejected.
#[test]
fn unknown_section_is_rejected() {
    let toml = r#"
[database]
path = "/tmp/x.db"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown section");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("database"),
        "error should mention the unknown key, got: {err_str}"
    );
}

/// Wrong value types surface as InvalidType.
#[test]
fn wrong_type_produces_invalid_type_error() {
    let toml = r#"
[gateway]
port = "eighty"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject string port");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. })),
        "got: {errors:?}"
    );
}

/// Unknown responder profile names are rejected.
#[test]
fn unknown_responder_profile_is_rejected() {
    let toml = r#"
[responder]
profile = "frontend"
"#;

    assert!(load_config_from_str(toml).is_err());
}

/// Semantic validation runs after deserialization.
#[test]
fn validation_errors_are_reported() {
    let toml = r#"
[lexicon]
score_divisor = -1.0

[hosted]
timeout_secs = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert_eq!(errors.len(), 2, "got: {errors:?}");
    assert!(
        errors
            .iter()
            .all(|e| matches!(e, ConfigError::Validation { .. }))
    );
}

/// Config round-trips through serde for the Serialized defaults provider.
#[test]
fn default_config_serializes_to_json() {
    let json = serde_json::to_value(MoodlineConfig::default()).unwrap();
    assert_eq!(json["responder"]["profile"], "journal");
    assert_eq!(json["lexicon"]["score_divisor"], 5.0);
}
