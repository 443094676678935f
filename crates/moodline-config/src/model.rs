// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Moodline.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Moodline configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MoodlineConfig {
    /// Application identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// Generative (chat-completion) provider settings.
    #[serde(default)]
    pub generative: GenerativeConfig,

    /// Hosted sentiment classifier settings.
    #[serde(default)]
    pub hosted: HostedConfig,

    /// Local lexicon analyzer settings.
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Rule-based responder settings.
    #[serde(default)]
    pub responder: ResponderConfig,

    /// HTTP gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name used in logs and health output.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "moodline".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Generative provider configuration (OpenAI-compatible chat completions).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GenerativeConfig {
    /// API key. `None` falls back to the `FIREWORKS_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the chat-completions API (without `/chat/completions`).
    #[serde(default = "default_generative_base_url")]
    pub base_url: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_generative_model")]
    pub model: String,

    /// Sampling temperature for sentiment and crisis-resource requests.
    #[serde(default = "default_sentiment_temperature")]
    pub sentiment_temperature: f32,

    /// Sampling temperature for supportive-response generation.
    #[serde(default = "default_response_temperature")]
    pub response_temperature: f32,

    /// Maximum tokens for sentiment and response requests.
    #[serde(default = "default_generative_max_tokens")]
    pub max_tokens: u32,

    /// Maximum tokens for the crisis-resource request.
    #[serde(default = "default_crisis_max_tokens")]
    pub crisis_max_tokens: u32,

    /// Optional request timeout. `None` leaves the transport default in place.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_generative_base_url(),
            model: default_generative_model(),
            sentiment_temperature: default_sentiment_temperature(),
            response_temperature: default_response_temperature(),
            max_tokens: default_generative_max_tokens(),
            crisis_max_tokens: default_crisis_max_tokens(),
            request_timeout_secs: None,
        }
    }
}

fn default_generative_base_url() -> String {
    "https://api.fireworks.ai/inference/v1".to_string()
}

fn default_generative_model() -> String {
    "accounts/fireworks/models/gpt-oss-20b".to_string()
}

fn default_sentiment_temperature() -> f32 {
    0.1
}

fn default_response_temperature() -> f32 {
    0.7
}

fn default_generative_max_tokens() -> u32 {
    1024
}

fn default_crisis_max_tokens() -> u32 {
    800
}

/// Hosted sentiment classifier configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HostedConfig {
    /// API key. `None` falls back to the `HUGGINGFACE_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Full inference URL of the classification model.
    #[serde(default = "default_hosted_api_url")]
    pub api_url: String,

    /// Client-side timeout for a classification call.
    #[serde(default = "default_hosted_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HostedConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_hosted_api_url(),
            timeout_secs: default_hosted_timeout_secs(),
        }
    }
}

fn default_hosted_api_url() -> String {
    "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english"
        .to_string()
}

fn default_hosted_timeout_secs() -> u64 {
    10
}

/// Local lexicon analyzer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconConfig {
    /// Divisor applied to the summed token polarities.
    #[serde(default = "default_score_divisor")]
    pub score_divisor: f64,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            score_divisor: default_score_divisor(),
        }
    }
}

fn default_score_divisor() -> f64 {
    5.0
}

/// Which tier table and message pools the rule-based responder uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponderProfileName {
    /// Mood-only buckets, crisis when sentiment < -0.7.
    #[default]
    Journal,
    /// Mood-or-sentiment tiers, crisis when mood <= 2 or sentiment <= -0.8.
    Companion,
}

/// Rule-based responder configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResponderConfig {
    #[serde(default)]
    pub profile: ResponderProfileName,

    /// Seed for message selection. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Address to bind.
    #[serde(default = "default_gateway_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_gateway_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
        }
    }
}

fn default_gateway_host() -> String {
    "127.0.0.1".to_string()
}

fn default_gateway_port() -> u16 {
    3000
}
