// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Moodline sentiment and response pipeline.

use thiserror::Error;

/// The primary error type used across all Moodline adapters and orchestrators.
///
/// Providers return these; orchestration layers convert them into degraded
/// but valid results and never hand them to their own callers.
#[derive(Debug, Error)]
pub enum MoodlineError {
    /// Configuration errors (invalid TOML, bad header values, client construction).
    #[error("configuration error: {0}")]
    Config(String),

    /// A provider's credential is not configured. Expected; triggers fallback silently.
    #[error("provider unavailable: {provider} has no credential configured")]
    ProviderUnavailable { provider: String },

    /// Remote provider failure (network, non-2xx status, response shape violation).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generated text contained no recoverable JSON object.
    #[error("malformed provider response: no valid JSON found in `{excerpt}`")]
    MalformedResponse { excerpt: String },

    /// Unexpected fault inside local analysis. Absorbed by the sentiment orchestrator.
    #[error("analysis failure: {0}")]
    AnalysisFailure(String),

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl MoodlineError {
    /// Wraps any error as a [`MoodlineError::Provider`] with a context message.
    pub fn provider<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Provider {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true when the error only signals a missing credential.
    ///
    /// Callers log these at debug level instead of warn.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ProviderUnavailable { .. })
    }
}
