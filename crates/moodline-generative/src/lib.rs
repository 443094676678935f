// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generative provider client for Moodline.
//!
//! [`GenerativeAnalyst`] runs the three prompt-driven operations (sentiment,
//! supportive response, crisis resources) against any [`CompletionProvider`].
//! Without a credential every operation fails fast with
//! [`MoodlineError::ProviderUnavailable`]; any other fault surfaces as
//! [`MoodlineError::Provider`] so callers can fail over.

pub mod client;
pub mod extract;
pub mod prompts;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use moodline_config::model::GenerativeConfig;
use moodline_core::error::MoodlineError;
use moodline_core::traits::CompletionProvider;
use moodline_core::types::{
    ChatMessage, CompletionRequest, HealthStatus, JournalInput, SentimentResult,
    SentimentSource, TextFeatures, normalize_score,
};
use serde_json::Value;
use tracing::{debug, info};

pub use client::FireworksProvider;
pub use extract::extract_json;

/// Environment variable consulted when no key is configured.
pub const API_KEY_ENV: &str = "FIREWORKS_API_KEY";

const PROVIDER_NAME: &str = "fireworks";

/// Model and sampling parameters for the three operations.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub sentiment_temperature: f32,
    pub response_temperature: f32,
    pub max_tokens: u32,
    pub crisis_max_tokens: u32,
}

impl From<&GenerativeConfig> for GenerationSettings {
    fn from(config: &GenerativeConfig) -> Self {
        Self {
            model: config.model.clone(),
            sentiment_temperature: config.sentiment_temperature,
            response_temperature: config.response_temperature,
            max_tokens: config.max_tokens,
            crisis_max_tokens: config.crisis_max_tokens,
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::from(&GenerativeConfig::default())
    }
}

/// Prompt-driven sentiment, response, and crisis-resource generation.
#[derive(Clone)]
pub struct GenerativeAnalyst {
    provider: Option<Arc<dyn CompletionProvider>>,
    settings: GenerationSettings,
}

impl std::fmt::Debug for GenerativeAnalyst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerativeAnalyst")
            .field("provider", &self.provider.as_ref().map(|p| p.name().to_string()))
            .field("settings", &self.settings)
            .finish()
    }
}

impl GenerativeAnalyst {
    /// Builds the analyst from configuration.
    ///
    /// Key resolution: `generative.api_key`, then `FIREWORKS_API_KEY`. With
    /// neither set the analyst is constructed without a provider.
    pub fn from_config(config: &GenerativeConfig) -> Result<Self, MoodlineError> {
        let settings = GenerationSettings::from(config);
        let Some(api_key) = resolve_api_key(config.api_key.as_deref()) else {
            info!("generative provider not configured, rule-based fallbacks will be used");
            return Ok(Self::unconfigured(settings));
        };

        let timeout = config.request_timeout_secs.map(Duration::from_secs);
        let provider = FireworksProvider::new(&api_key, &config.base_url, timeout)?;
        info!(model = %settings.model, endpoint = %provider.endpoint(), "generative provider initialized");
        Ok(Self::with_provider(Arc::new(provider), settings))
    }

    pub fn with_provider(provider: Arc<dyn CompletionProvider>, settings: GenerationSettings) -> Self {
        Self {
            provider: Some(provider),
            settings,
        }
    }

    pub fn unconfigured(settings: GenerationSettings) -> Self {
        Self {
            provider: None,
            settings,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Asks the model for a structured sentiment analysis of `text`.
    pub async fn analyze_sentiment(&self, text: &str) -> Result<SentimentResult, MoodlineError> {
        let content = self
            .ask(
                prompts::SENTIMENT_SYSTEM_PROMPT,
                prompts::sentiment_prompt(text),
                self.settings.sentiment_temperature,
                self.settings.max_tokens,
            )
            .await?;

        let value = extract_json(&content).map_err(into_provider_error)?;
        let result = sentiment_from_value(&value)?;
        info!(text_len = text.len(), score = result.score, "generative sentiment analysis completed");
        Ok(result)
    }

    /// Generates a short supportive reply. The text is trimmed, never parsed.
    pub async fn generate_response(&self, input: &JournalInput) -> Result<String, MoodlineError> {
        let content = self
            .ask(
                prompts::RESPONSE_SYSTEM_PROMPT,
                prompts::response_prompt(input),
                self.settings.response_temperature,
                self.settings.max_tokens,
            )
            .await?;

        let reply = content.trim();
        if reply.is_empty() {
            return Err(MoodlineError::Provider {
                message: "generative response was empty".into(),
                source: None,
            });
        }
        info!(
            content_len = input.text.len(),
            mood = ?input.mood,
            context = ?input.context,
            "generative response generated"
        );
        Ok(reply.to_string())
    }

    /// Asks the model for crisis resources as a JSON object.
    pub async fn crisis_resources(&self) -> Result<Value, MoodlineError> {
        let content = self
            .ask(
                prompts::CRISIS_SYSTEM_PROMPT,
                prompts::CRISIS_PROMPT.to_string(),
                self.settings.sentiment_temperature,
                self.settings.crisis_max_tokens,
            )
            .await?;

        let value = extract_json(&content).map_err(into_provider_error)?;
        if !value.is_object() {
            return Err(MoodlineError::Provider {
                message: "crisis resources response is not a JSON object".into(),
                source: None,
            });
        }
        info!("generative crisis resources generated");
        Ok(value)
    }

    /// `Healthy` with a provider, `Degraded` without.
    pub async fn health(&self) -> HealthStatus {
        match &self.provider {
            Some(provider) => provider
                .health_check()
                .await
                .unwrap_or_else(|e| HealthStatus::Unhealthy(e.to_string())),
            None => HealthStatus::Degraded(format!(
                "no credential; set generative.api_key or {API_KEY_ENV}"
            )),
        }
    }

    async fn ask(
        &self,
        system: &str,
        user: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, MoodlineError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| MoodlineError::ProviderUnavailable {
                provider: PROVIDER_NAME.to_string(),
            })?;

        let request = CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature,
            max_tokens,
        };
        debug!(model = %request.model, temperature, max_tokens, "sending completion request");

        let response = provider.complete(request).await.map_err(into_provider_error)?;
        Ok(response.content)
    }
}

/// Keeps `ProviderUnavailable` and `Provider` as-is and wraps everything else.
fn into_provider_error(err: MoodlineError) -> MoodlineError {
    match err {
        MoodlineError::ProviderUnavailable { .. } | MoodlineError::Provider { .. } => err,
        other => MoodlineError::provider(format!("generative call failed: {other}"), other),
    }
}

/// Reads a model-produced sentiment object leniently.
///
/// `score` must be present and numeric (a numeric string is accepted); it is
/// clamped into [-1, 1]. Everything under `features` is optional.
pub fn sentiment_from_value(value: &Value) -> Result<SentimentResult, MoodlineError> {
    let score = number(&value["score"]).ok_or_else(|| MoodlineError::Provider {
        message: format!("generative sentiment has no numeric score: {}", value["score"]),
        source: None,
    })?;

    let raw_features = &value["features"];
    let emotions = raw_features["emotions"]
        .as_object()
        .map(|map| {
            map.iter()
                .filter_map(|(k, v)| number(v).map(|n| (k.clone(), n)))
                .collect()
        })
        .unwrap_or_default();
    let themes = raw_features["themes"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|t| t.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    let features = TextFeatures {
        word_count: number(&raw_features["wordCount"]).map_or(0, |n| n.max(0.0) as usize),
        emotions,
        themes,
        urgency: number(&raw_features["urgency"]).map_or(0.0, |u| u.clamp(0.0, 1.0)),
        crisis_phrases: Vec::new(),
    };

    let analysis = match &value["analysis"] {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    };

    Ok(SentimentResult {
        score: normalize_score(score),
        source: SentimentSource::Generative,
        features,
        analysis,
    })
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn resolve_api_key(config_key: Option<&str>) -> Option<String> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Some(key.to_string());
    }
    std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodline_test_utils::{MockCompletionProvider, MockReply};

    fn analyst(mock: &MockCompletionProvider) -> GenerativeAnalyst {
        GenerativeAnalyst::with_provider(Arc::new(mock.clone()), GenerationSettings::default())
    }

    #[tokio::test]
    async fn unconfigured_analyst_is_unavailable_for_every_operation() {
        let analyst = GenerativeAnalyst::unconfigured(GenerationSettings::default());
        assert!(analyst.analyze_sentiment("x").await.unwrap_err().is_unavailable());
        assert!(
            analyst
                .generate_response(&JournalInput::new("x"))
                .await
                .unwrap_err()
                .is_unavailable()
        );
        assert!(analyst.crisis_resources().await.unwrap_err().is_unavailable());
        assert!(matches!(analyst.health().await, HealthStatus::Degraded(_)));
    }

    #[tokio::test]
    async fn sentiment_parses_fenced_reply_with_low_temperature() {
        let mock = MockCompletionProvider::with_texts([r#"```json
{
  "score": -0.6,
  "source": "fireworks-gpt-oss-20b",
  "features": {
    "wordCount": 5,
    "emotions": {"positive": 0, "negative": 2, "anxiety": 0.4},
    "themes": ["work"],
    "urgency": 0.2
  },
  "analysis": "The writer sounds stressed about work."
}
```"#]);
        let result = analyst(&mock).analyze_sentiment("Work is crushing me").await.unwrap();

        assert_eq!(result.score, -0.6);
        assert_eq!(result.source, SentimentSource::Generative);
        assert_eq!(result.features.word_count, 5);
        assert_eq!(result.features.emotions["anxiety"], 0.4);
        assert_eq!(result.features.themes, vec!["work"]);
        assert_eq!(result.analysis.as_deref(), Some("The writer sounds stressed about work."));

        let requests = mock.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].temperature, 0.1);
        assert_eq!(requests[0].max_tokens, 1024);
        assert_eq!(requests[0].messages[0].role, "system");
        assert!(requests[0].messages[1].content.contains("Work is crushing me"));
    }

    #[tokio::test]
    async fn out_of_range_score_is_clamped() {
        let mock = MockCompletionProvider::with_texts([r#"{"score": 3}"#]);
        let result = analyst(&mock).analyze_sentiment("x").await.unwrap();
        assert_eq!(result.score, 1.0);
        assert_eq!(result.features, TextFeatures::default());
    }

    #[tokio::test]
    async fn malformed_reply_surfaces_as_provider_error_with_source() {
        let mock = MockCompletionProvider::with_texts(["I cannot do that."]);
        let err = analyst(&mock).analyze_sentiment("x").await.unwrap_err();
        match &err {
            MoodlineError::Provider { source, .. } => {
                let source = source.as_ref().expect("source is kept");
                assert!(source.to_string().contains("malformed"));
            }
            other => panic!("expected Provider, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_score_is_a_provider_error() {
        let mock = MockCompletionProvider::with_texts([r#"{"analysis": "fine"}"#]);
        let err = analyst(&mock).analyze_sentiment("x").await.unwrap_err();
        assert!(err.to_string().contains("no numeric score"), "got: {err}");
    }

    #[tokio::test]
    async fn response_is_trimmed_and_uses_response_temperature() {
        let mock = MockCompletionProvider::with_texts(["\n  That sounds hard. I'm here for you.  \n"]);
        let input = JournalInput::new("rough day").with_mood(3);
        let reply = analyst(&mock).generate_response(&input).await.unwrap();
        assert_eq!(reply, "That sounds hard. I'm here for you.");
        assert_eq!(mock.requests().await[0].temperature, 0.7);
    }

    #[tokio::test]
    async fn blank_response_is_an_error() {
        let mock = MockCompletionProvider::with_texts(["   "]);
        assert!(analyst(&mock).generate_response(&JournalInput::new("x")).await.is_err());
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let mock = MockCompletionProvider::with_replies([MockReply::Fail("503".into())]);
        let err = analyst(&mock).generate_response(&JournalInput::new("x")).await.unwrap_err();
        assert!(matches!(err, MoodlineError::Provider { .. }));
    }

    #[tokio::test]
    async fn crisis_resources_use_crisis_token_budget() {
        let mock = MockCompletionProvider::with_texts([
            r#"{"resources": {"emergency": {}}, "message": "You are not alone.",}"#,
        ]);
        let value = analyst(&mock).crisis_resources().await.unwrap();
        assert_eq!(value["message"], "You are not alone.");
        let request = &mock.requests().await[0];
        assert_eq!(request.max_tokens, 800);
        assert_eq!(request.temperature, 0.1);
    }

    #[test]
    fn lenient_sentiment_accepts_numeric_strings() {
        let value = serde_json::json!({
            "score": "-0.25",
            "features": {"wordCount": "4", "emotions": {"anxiety": "high"}, "urgency": 2}
        });
        let result = sentiment_from_value(&value).unwrap();
        assert_eq!(result.score, -0.25);
        assert_eq!(result.features.word_count, 4);
        assert!(result.features.emotions.is_empty());
        assert_eq!(result.features.urgency, 1.0);
        assert!(result.analysis.is_none());
    }

    #[test]
    fn config_key_takes_precedence() {
        assert_eq!(resolve_api_key(Some("fw-1")).as_deref(), Some("fw-1"));
    }
}
