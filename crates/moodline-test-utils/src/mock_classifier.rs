// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock hosted classifier returning a fixed score.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use moodline_core::MoodlineError;
use moodline_core::traits::{PluginAdapter, SentimentClassifier};
use moodline_core::types::{AdapterType, HealthStatus};

/// Classifier double. `None` behaves like an unconfigured or failing service.
#[derive(Debug, Clone, Default)]
pub struct MockClassifier {
    score: Option<f64>,
    calls: Arc<AtomicUsize>,
}

impl MockClassifier {
    /// Always returns `score`.
    pub fn returning(score: f64) -> Self {
        Self {
            score: Some(score),
            calls: Arc::default(),
        }
    }

    /// Always returns `None`.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Number of `classify` calls observed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PluginAdapter for MockClassifier {
    fn name(&self) -> &str {
        "mock-classifier"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Classifier
    }

    async fn health_check(&self) -> Result<HealthStatus, MoodlineError> {
        Ok(match self.score {
            Some(_) => HealthStatus::Healthy,
            None => HealthStatus::Degraded("mock classifier has no score".into()),
        })
    }
}

#[async_trait]
impl SentimentClassifier for MockClassifier {
    async fn classify(&self, _text: &str) -> Option<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_calls() {
        let classifier = MockClassifier::returning(0.4);
        assert_eq!(classifier.classify("a").await, Some(0.4));
        assert_eq!(classifier.classify("b").await, Some(0.4));
        assert_eq!(classifier.calls(), 2);
        assert_eq!(MockClassifier::unavailable().classify("c").await, None);
    }
}
