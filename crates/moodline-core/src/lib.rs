// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Moodline.
//!
//! Holds the error taxonomy, the sentiment/response data model, and the
//! adapter traits that the provider crates implement and the pipeline
//! consumes.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::MoodlineError;
pub use types::{
    AdapterType, HealthStatus, JournalInput, LocalAnalysis, ResponseCategory, ResponseResult,
    ResponseSource, SentimentResult, SentimentSource, TextFeatures, normalize_score,
};

pub use traits::{CompletionProvider, PluginAdapter, SentimentClassifier, TextAnalyzer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moodline_error_has_taxonomy_variants() {
        let unavailable = MoodlineError::ProviderUnavailable {
            provider: "fireworks".into(),
        };
        assert!(unavailable.is_unavailable());

        let provider = MoodlineError::provider("boom", std::io::Error::other("io"));
        assert!(!provider.is_unavailable());
        assert!(provider.to_string().contains("boom"));

        let malformed = MoodlineError::MalformedResponse {
            excerpt: "not json".into(),
        };
        assert!(malformed.to_string().contains("not json"));

        let _analysis = MoodlineError::AnalysisFailure("test".into());
        let _config = MoodlineError::Config("test".into());
        let _timeout = MoodlineError::Timeout {
            duration: std::time::Duration::from_secs(10),
        };
        let _internal = MoodlineError::Internal("test".into());
    }

    #[test]
    fn sentiment_source_serializes_kebab_case() {
        let json = serde_json::to_string(&SentimentSource::HostedClassifier).unwrap();
        assert_eq!(json, "\"hosted-classifier\"");
        let json = serde_json::to_string(&SentimentSource::LocalLexicon).unwrap();
        assert_eq!(json, "\"local-lexicon\"");
        assert_eq!(SentimentSource::Fallback.to_string(), "fallback");
    }

    #[test]
    fn response_category_labels() {
        use std::str::FromStr;

        let labels = [
            (ResponseCategory::Crisis, "crisis"),
            (ResponseCategory::VeryLow, "veryLow"),
            (ResponseCategory::Low, "low"),
            (ResponseCategory::Neutral, "neutral"),
            (ResponseCategory::MediumHigh, "mediumHigh"),
            (ResponseCategory::High, "high"),
            (ResponseCategory::NotApplicable, "n/a"),
        ];

        for (category, label) in labels {
            assert_eq!(category.to_string(), label);
            assert_eq!(ResponseCategory::from_str(label).unwrap(), category);
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{label}\""));
        }
    }

    #[test]
    fn fallback_result_is_neutral_and_finite() {
        let fallback = SentimentResult::fallback();
        assert_eq!(fallback.score, 0.0);
        assert_eq!(fallback.source, SentimentSource::Fallback);
        assert_eq!(fallback.features, TextFeatures::default());
        assert!(fallback.analysis.is_none());

        let error = SentimentResult::error();
        assert_eq!(error.score, 0.0);
        assert_eq!(error.source, SentimentSource::Error);
    }

    #[test]
    fn normalize_score_clamps_and_rejects_nan() {
        assert_eq!(normalize_score(1.6), 1.0);
        assert_eq!(normalize_score(-2.0), -1.0);
        assert_eq!(normalize_score(0.25), 0.25);
        assert_eq!(normalize_score(f64::NAN), 0.0);
        assert_eq!(normalize_score(f64::INFINITY), 0.0);
    }

    #[test]
    fn features_serialize_camel_case_and_skip_empty_crisis_phrases() {
        let features = TextFeatures {
            word_count: 3,
            themes: vec!["work".into()],
            ..TextFeatures::default()
        };
        let json = serde_json::to_value(&features).unwrap();
        assert_eq!(json["wordCount"], 3);
        assert!(json.get("crisisPhrases").is_none());
    }

    #[test]
    fn journal_input_accepts_content_alias() {
        let input: JournalInput =
            serde_json::from_str(r#"{"content": "hello", "mood": 6}"#).unwrap();
        assert_eq!(input.text, "hello");
        assert_eq!(input.mood, Some(6));
        assert!(input.emotions.is_empty());
        assert!(input.context.is_none());
    }

    #[test]
    fn all_trait_modules_are_exported() {
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
        fn _assert_completion_provider<T: CompletionProvider>() {}
        fn _assert_sentiment_classifier<T: SentimentClassifier>() {}
        fn _assert_text_analyzer<T: TextAnalyzer>() {}
    }
}
