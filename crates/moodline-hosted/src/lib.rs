// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hosted binary sentiment classifier adapter.
//!
//! [`HostedClassifier`] posts `{"inputs": text}` to a hosted classification
//! model and turns the `POSITIVE`/`NEGATIVE` probabilities into a signed
//! score. It never fails: a missing credential, transport error, timeout,
//! non-2xx status, or unexpected body all produce `None`.

pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use moodline_config::model::HostedConfig;
use moodline_core::error::MoodlineError;
use moodline_core::traits::{PluginAdapter, SentimentClassifier};
use moodline_core::types::{AdapterType, HealthStatus};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use tracing::{debug, info, warn};

use crate::types::{ClassifyRequest, ClassifyResponse, polarity};

/// Environment variable consulted when no key is configured.
pub const API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";

/// Client for a hosted `POSITIVE`/`NEGATIVE` classifier.
#[derive(Debug, Clone)]
pub struct HostedClassifier {
    client: reqwest::Client,
    api_key: Option<String>,
    api_url: String,
    timeout: Duration,
}

impl HostedClassifier {
    /// Builds the classifier from configuration.
    ///
    /// Key resolution: `hosted.api_key`, then `HUGGINGFACE_API_KEY`, then none.
    pub fn from_config(config: &HostedConfig) -> Result<Self, MoodlineError> {
        let api_key = resolve_api_key(config.api_key.as_deref());
        let classifier = Self::new(
            api_key,
            config.api_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;
        info!(
            url = %classifier.api_url,
            configured = classifier.is_configured(),
            "hosted classifier initialized"
        );
        Ok(classifier)
    }

    /// Builds a classifier with an explicit credential.
    pub fn new(
        api_key: Option<String>,
        api_url: String,
        timeout: Duration,
    ) -> Result<Self, MoodlineError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| MoodlineError::provider("failed to build HTTP client", e))?;
        Ok(Self {
            client,
            api_key,
            api_url,
            timeout,
        })
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether a credential is available.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Performs the request, surfacing every failure as an error.
    async fn request_score(&self, api_key: &str, text: &str) -> Result<f64, MoodlineError> {
        let auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| MoodlineError::Config(format!("invalid API key header value: {e}")))?;

        let response = self
            .client
            .post(&self.api_url)
            .header(AUTHORIZATION, auth)
            .timeout(self.timeout)
            .json(&ClassifyRequest { inputs: text })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MoodlineError::Timeout {
                        duration: self.timeout,
                    }
                } else {
                    MoodlineError::provider(format!("HTTP request failed: {e}"), e)
                }
            })?;

        let status = response.status();
        debug!(status = %status, "classifier response received");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MoodlineError::Provider {
                message: format!("classifier returned {status}: {body}"),
                source: None,
            });
        }

        let parsed: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| MoodlineError::provider(format!("unexpected classifier body: {e}"), e))?;

        polarity(&parsed).ok_or_else(|| MoodlineError::Provider {
            message: "unexpected classifier response format: need both POSITIVE and NEGATIVE labels".into(),
            source: None,
        })
    }
}

#[async_trait]
impl PluginAdapter for HostedClassifier {
    fn name(&self) -> &str {
        "hosted-classifier"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Classifier
    }

    async fn health_check(&self) -> Result<HealthStatus, MoodlineError> {
        if self.is_configured() {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Degraded(format!(
                "no credential; set hosted.api_key or {API_KEY_ENV}"
            )))
        }
    }
}

#[async_trait]
impl SentimentClassifier for HostedClassifier {
    async fn classify(&self, text: &str) -> Option<f64> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("hosted classifier has no credential, skipping");
            return None;
        };

        match self.request_score(api_key, text).await {
            Ok(score) => {
                debug!(score, "hosted classifier scored text");
                Some(score)
            }
            Err(e) => {
                warn!(error = %e, "hosted classifier failed");
                None
            }
        }
    }
}

fn resolve_api_key(config_key: Option<&str>) -> Option<String> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Some(key.to_string());
    }
    std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty())
}
