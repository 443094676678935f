// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sentiment orchestrator: hosted classifier first, local lexicon second.
//!
//! Features always come from the local extractor, whichever provider
//! supplied the score. [`SentimentOrchestrator::analyze`] never fails.

use std::sync::Arc;

use futures::future::join_all;
use moodline_core::error::MoodlineError;
use moodline_core::traits::{SentimentClassifier, TextAnalyzer};
use moodline_core::types::{HealthStatus, SentimentResult, SentimentSource, normalize_score};
use tracing::{debug, warn};

/// Hosted-then-local sentiment scoring with a failure boundary.
#[derive(Clone)]
pub struct SentimentOrchestrator {
    hosted: Arc<dyn SentimentClassifier>,
    analyzer: Arc<dyn TextAnalyzer>,
}

impl SentimentOrchestrator {
    pub fn new(hosted: Arc<dyn SentimentClassifier>, analyzer: Arc<dyn TextAnalyzer>) -> Self {
        Self { hosted, analyzer }
    }

    /// Scores `text`.
    ///
    /// Any internal failure yields [`SentimentResult::fallback`]. The score is
    /// always finite and within [-1, 1].
    pub async fn analyze(&self, text: &str) -> SentimentResult {
        match self.try_analyze(text).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "sentiment analysis failed, using emergency fallback");
                SentimentResult::fallback()
            }
        }
    }

    async fn try_analyze(&self, text: &str) -> Result<SentimentResult, MoodlineError> {
        let (score, source) = match self.hosted.classify(text).await {
            Some(score) => (score, SentimentSource::HostedClassifier),
            None => {
                debug!("hosted classifier gave no score, using local lexicon");
                let local = self.analyzer.analyze(text)?;
                (local.score, SentimentSource::LocalLexicon)
            }
        };

        let features = self.analyzer.extract_features(text)?;
        debug!(score, source = %source, "sentiment scored");
        Ok(SentimentResult {
            score: normalize_score(score),
            source,
            features,
            analysis: None,
        })
    }

    /// Scores every text concurrently, preserving input order.
    ///
    /// A slot whose task dies (for example a panic inside an analyzer) becomes
    /// [`SentimentResult::error`]; the other slots are unaffected. This relies
    /// on panics unwinding into a `JoinError`, so no build profile may set
    /// `panic = "abort"`.
    pub async fn analyze_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SentimentResult> {
        let tasks = texts.iter().map(|text| {
            let this = self.clone();
            let text = text.as_ref().to_owned();
            tokio::spawn(async move { this.analyze(&text).await })
        });

        join_all(tasks)
            .await
            .into_iter()
            .enumerate()
            .map(|(index, outcome)| {
                outcome.unwrap_or_else(|e| {
                    warn!(index, error = %e, "batch sentiment task failed");
                    SentimentResult::error()
                })
            })
            .collect()
    }

    /// Health of the hosted classifier. The local analyzer is always available.
    pub async fn hosted_health(&self) -> HealthStatus {
        self.hosted
            .health_check()
            .await
            .unwrap_or_else(|e| HealthStatus::Unhealthy(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodline_core::types::{LocalAnalysis, TextFeatures};
    use moodline_lexicon::LexiconAnalyzer;
    use moodline_test_utils::MockClassifier;

    /// Analyzer whose every call fails.
    struct BrokenAnalyzer;

    impl TextAnalyzer for BrokenAnalyzer {
        fn analyze(&self, _text: &str) -> Result<LocalAnalysis, MoodlineError> {
            Err(MoodlineError::AnalysisFailure("injected".into()))
        }

        fn extract_features(&self, _text: &str) -> Result<TextFeatures, MoodlineError> {
            Err(MoodlineError::AnalysisFailure("injected".into()))
        }
    }

    /// Analyzer returning a non-finite score.
    struct NanAnalyzer;

    impl TextAnalyzer for NanAnalyzer {
        fn analyze(&self, _text: &str) -> Result<LocalAnalysis, MoodlineError> {
            Ok(LocalAnalysis {
                score: f64::NAN,
                features: TextFeatures::default(),
            })
        }

        fn extract_features(&self, _text: &str) -> Result<TextFeatures, MoodlineError> {
            Ok(TextFeatures::default())
        }
    }

    fn orchestrator(
        hosted: MockClassifier,
        analyzer: impl TextAnalyzer,
    ) -> SentimentOrchestrator {
        SentimentOrchestrator::new(Arc::new(hosted), Arc::new(analyzer))
    }

    #[tokio::test]
    async fn hosted_score_wins_but_features_are_local() {
        let o = orchestrator(MockClassifier::returning(0.8), LexiconAnalyzer::default());
        let result = o.analyze("I hate my job!").await;
        assert_eq!(result.score, 0.8);
        assert_eq!(result.source, SentimentSource::HostedClassifier);
        assert_eq!(result.features.themes, vec!["work"]);
        assert_eq!(result.features.emotions["negative"], 1.0);
    }

    #[tokio::test]
    async fn falls_back_to_local_lexicon() {
        let o = orchestrator(MockClassifier::unavailable(), LexiconAnalyzer::default());
        let result = o.analyze("such a sad and awful day").await;
        assert_eq!(result.source, SentimentSource::LocalLexicon);
        assert!((result.score - -1.0).abs() < 1e-9, "got {}", result.score);
    }

    #[tokio::test]
    async fn local_scores_are_clamped() {
        let o = orchestrator(MockClassifier::unavailable(), LexiconAnalyzer::default());
        let result = o.analyze("amazing wonderful fantastic awesome").await;
        assert_eq!(result.score, 1.0);
    }

    #[tokio::test]
    async fn hosted_scores_are_clamped_too() {
        let o = orchestrator(MockClassifier::returning(-1.7), LexiconAnalyzer::default());
        assert_eq!(o.analyze("x").await.score, -1.0);
    }

    #[tokio::test]
    async fn non_finite_scores_become_zero() {
        let o = orchestrator(MockClassifier::unavailable(), NanAnalyzer);
        let result = o.analyze("x").await;
        assert_eq!(result.score, 0.0);
        assert_eq!(result.source, SentimentSource::LocalLexicon);
    }

    #[tokio::test]
    async fn failures_everywhere_yield_the_emergency_fallback() {
        let o = orchestrator(MockClassifier::unavailable(), BrokenAnalyzer);
        let result = o.analyze("anything").await;
        assert_eq!(result, SentimentResult::fallback());
        assert_eq!(result.features.urgency, 0.0);
        assert!(result.analysis.is_none());
    }

    #[tokio::test]
    async fn feature_failure_after_hosted_success_still_falls_back() {
        let o = orchestrator(MockClassifier::returning(0.3), BrokenAnalyzer);
        assert_eq!(o.analyze("x").await.source, SentimentSource::Fallback);
    }

    #[tokio::test]
    async fn batch_preserves_order() {
        let o = orchestrator(MockClassifier::unavailable(), LexiconAnalyzer::default());
        let results = o.analyze_batch(&["good", "bad", ""]).await;
        assert_eq!(results.len(), 3);
        assert!(results[0].score > 0.0);
        assert!(results[1].score < 0.0);
        assert_eq!(results[2].score, 0.0);
    }

    #[tokio::test]
    async fn empty_batch_is_empty() {
        let o = orchestrator(MockClassifier::unavailable(), LexiconAnalyzer::default());
        assert!(o.analyze_batch::<&str>(&[]).await.is_empty());
    }
}
