// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model shared by every stage of the sentiment and response pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter works but cannot reach its preferred backend (e.g. no credential).
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter behind a trait object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    /// Chat-completion model provider.
    Completion,
    /// Remote binary sentiment classifier.
    Classifier,
    /// Local, in-process text analyzer.
    Analyzer,
}

/// Which provider actually produced a [`SentimentResult::score`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SentimentSource {
    Generative,
    HostedClassifier,
    LocalLexicon,
    /// Emergency value produced by the orchestrator's failure boundary.
    Fallback,
    /// Per-item value produced when one slot of a batch could not complete.
    Error,
}

/// Heuristic, keyword-driven signals extracted alongside the score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFeatures {
    /// Number of tokens in the text.
    #[serde(default)]
    pub word_count: usize,

    /// Coarse emotion class -> count (local) or intensity in [0, 1] (generative).
    #[serde(default)]
    pub emotions: BTreeMap<String, f64>,

    /// Detected topic tags, deduplicated.
    #[serde(default)]
    pub themes: Vec<String>,

    /// Urgency estimate in [0, 1].
    #[serde(default)]
    pub urgency: f64,

    /// Crisis phrases found verbatim in the text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crisis_phrases: Vec<String>,
}

/// Output of the local analyzer: a raw (unclamped) score plus features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalAnalysis {
    pub score: f64,
    pub features: TextFeatures,
}

impl LocalAnalysis {
    /// The zero result returned when analysis cannot proceed.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Sentiment of a single text, always well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Polarity in [-1, 1]; 0 is neutral or unknown. Always finite.
    pub score: f64,
    pub source: SentimentSource,
    pub features: TextFeatures,
    /// Natural-language explanation (generative path only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

impl SentimentResult {
    /// The guaranteed-safe terminal state of the sentiment orchestrator.
    pub fn fallback() -> Self {
        Self {
            score: 0.0,
            source: SentimentSource::Fallback,
            features: TextFeatures::default(),
            analysis: None,
        }
    }

    /// Per-item placeholder for a batch slot whose analysis did not complete.
    pub fn error() -> Self {
        Self {
            source: SentimentSource::Error,
            ..Self::fallback()
        }
    }
}

/// Clamps a raw provider score into [-1, 1], mapping non-finite values to 0.
pub fn normalize_score(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Mood/sentiment tier that selected a rule-based message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum ResponseCategory {
    #[serde(rename = "crisis")]
    #[strum(serialize = "crisis")]
    Crisis,
    #[serde(rename = "veryLow")]
    #[strum(serialize = "veryLow")]
    VeryLow,
    #[serde(rename = "low")]
    #[strum(serialize = "low")]
    Low,
    #[serde(rename = "neutral")]
    #[strum(serialize = "neutral")]
    Neutral,
    #[serde(rename = "mediumHigh")]
    #[strum(serialize = "mediumHigh")]
    MediumHigh,
    #[serde(rename = "high")]
    #[strum(serialize = "high")]
    High,
    /// Generated text is not selected from a tier.
    #[serde(rename = "n/a")]
    #[strum(serialize = "n/a")]
    NotApplicable,
}

/// Which path produced a [`ResponseResult`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ResponseSource {
    Generative,
    RuleBased,
}

/// A supportive message and the signal that informed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseResult {
    /// Non-empty supportive message.
    pub text: String,
    pub sentiment_used: f64,
    pub category: ResponseCategory,
    pub source: ResponseSource,
}

/// Caller-facing input: journal text with optional mood and tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalInput {
    #[serde(alias = "content")]
    pub text: String,
    /// Self-reported mood, 1..=10.
    #[serde(default)]
    pub mood: Option<u8>,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub context: Option<String>,
}

impl JournalInput {
    /// Creates an input carrying only text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_mood(mut self, mood: u8) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn with_emotions<I, S>(mut self, emotions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emotions = emotions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

// --- Completion provider types ---

/// A single chat message sent to a completion provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("system", "user", "assistant").
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A chat-style completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// The text returned by a completion provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub content: String,
    pub model: String,
}
