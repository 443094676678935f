// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks constraints serde attributes cannot express. All errors are
//! collected; validation does not stop at the first failure.

use crate::diagnostic::ConfigError;
use crate::model::MoodlineConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
pub fn validate_config(config: &MoodlineConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.app.log_level.as_str()) {
        errors.push(ConfigError::validation(format!(
            "app.log_level `{}` must be one of: {}",
            config.app.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    let generative = &config.generative;
    if !looks_like_http_url(&generative.base_url) {
        errors.push(ConfigError::validation(format!(
            "generative.base_url `{}` must be an http(s) URL",
            generative.base_url
        )));
    }
    if generative.model.trim().is_empty() {
        errors.push(ConfigError::validation("generative.model must not be empty"));
    }
    for (key, value) in [
        ("sentiment_temperature", generative.sentiment_temperature),
        ("response_temperature", generative.response_temperature),
    ] {
        if !(0.0..=2.0).contains(&value) {
            errors.push(ConfigError::validation(format!(
                "generative.{key} must be within [0, 2], got {value}"
            )));
        }
    }
    if generative.max_tokens == 0 || generative.crisis_max_tokens == 0 {
        errors.push(ConfigError::validation(
            "generative.max_tokens and generative.crisis_max_tokens must be positive",
        ));
    }
    if generative.request_timeout_secs == Some(0) {
        errors.push(ConfigError::validation(
            "generative.request_timeout_secs must be positive when set",
        ));
    }

    if !looks_like_http_url(&config.hosted.api_url) {
        errors.push(ConfigError::validation(format!(
            "hosted.api_url `{}` must be an http(s) URL",
            config.hosted.api_url
        )));
    }
    if config.hosted.timeout_secs == 0 {
        errors.push(ConfigError::validation("hosted.timeout_secs must be positive"));
    }

    let divisor = config.lexicon.score_divisor;
    if !divisor.is_finite() || divisor <= 0.0 {
        errors.push(ConfigError::validation(format!(
            "lexicon.score_divisor must be a positive number, got {divisor}"
        )));
    }

    if config.gateway.host.trim().is_empty() {
        errors.push(ConfigError::validation("gateway.host must not be empty"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn looks_like_http_url(url: &str) -> bool {
    let url = url.trim();
    (url.starts_with("http://") || url.starts_with("https://")) && !url.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&MoodlineConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_violation() {
        let mut config = MoodlineConfig::default();
        config.app.log_level = "loud".into();
        config.generative.response_temperature = 3.5;
        config.hosted.timeout_secs = 0;
        config.lexicon.score_divisor = 0.0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4, "got: {errors:?}");
    }

    #[test]
    fn rejects_non_http_urls() {
        let mut config = MoodlineConfig::default();
        config.generative.base_url = "ftp://example.com".into();
        config.hosted.api_url = "".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
