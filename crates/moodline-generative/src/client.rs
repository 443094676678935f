// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for OpenAI-compatible chat-completions endpoints.
//!
//! [`FireworksProvider`] sends one request per call. There is no retry loop:
//! a failed call surfaces as an error and the caller fails over to the next
//! provider in its chain.

use std::time::Duration;

use async_trait::async_trait;
use moodline_core::error::MoodlineError;
use moodline_core::traits::{CompletionProvider, PluginAdapter};
use moodline_core::types::{
    AdapterType, CompletionRequest, CompletionResponse, HealthStatus,
};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, WireMessage};

/// Path appended to the base URL.
const COMPLETIONS_PATH: &str = "/chat/completions";

/// Chat-completions provider for Fireworks (or any OpenAI-compatible host).
#[derive(Debug, Clone)]
pub struct FireworksProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl FireworksProvider {
    /// Creates a provider.
    ///
    /// `timeout` of `None` leaves reqwest's default (no overall timeout).
    pub fn new(
        api_key: &str,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, MoodlineError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                MoodlineError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| MoodlineError::provider("failed to build HTTP client", e))?;

        Ok(Self {
            client,
            endpoint: format!("{}{COMPLETIONS_PATH}", base_url.trim_end_matches('/')),
        })
    }

    /// The full completions URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PluginAdapter for FireworksProvider {
    fn name(&self) -> &str {
        "fireworks"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Completion
    }

    async fn health_check(&self) -> Result<HealthStatus, MoodlineError> {
        // Health checks send no request, so they never spend tokens.
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl CompletionProvider for FireworksProvider {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, MoodlineError> {
        let body = ChatCompletionRequest {
            model: request.model,
            messages: request.messages.iter().map(WireMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| MoodlineError::provider(format!("HTTP request failed: {e}"), e))?;

        let status = response.status();
        debug!(status = %status, model = %body.model, "completion response received");

        let text = response
            .text()
            .await
            .map_err(|e| MoodlineError::provider("failed to read response body", e))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorResponse>(&text) {
                Ok(api_err) => format!("completion API error ({status}): {}", api_err.error.message),
                Err(_) => format!("completion API returned {status}: {text}"),
            };
            return Err(MoodlineError::Provider {
                message,
                source: None,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| MoodlineError::provider(format!("failed to parse API response: {e}"), e))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| MoodlineError::Provider {
                message: "completion response has no message content".into(),
                source: None,
            })?;

        Ok(CompletionResponse {
            id: parsed.id,
            content,
            model: if parsed.model.is_empty() {
                body.model
            } else {
                parsed.model
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodline_core::types::ChatMessage;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> FireworksProvider {
        FireworksProvider::new("fw-test", &format!("{}/inference/v1/", server.uri()), None).unwrap()
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "accounts/fireworks/models/gpt-oss-20b".into(),
            messages: vec![ChatMessage::system("be kind"), ChatMessage::user("hello")],
            temperature: 0.1,
            max_tokens: 1024,
        }
    }

    #[test]
    fn endpoint_joins_base_url_without_double_slash() {
        let p = FireworksProvider::new("k", "https://api.fireworks.ai/inference/v1/", None).unwrap();
        assert_eq!(
            p.endpoint(),
            "https://api.fireworks.ai/inference/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn complete_sends_chat_request_and_reads_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/inference/v1/chat/completions"))
            .and(header("authorization", "Bearer fw-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "accounts/fireworks/models/gpt-oss-20b",
                "max_tokens": 1024,
                "messages": [
                    {"role": "system", "content": "be kind"},
                    {"role": "user", "content": "hello"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "cmpl-1",
                "model": "accounts/fireworks/models/gpt-oss-20b",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "Hi!"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = provider(&server).complete(request()).await.unwrap();
        assert_eq!(response.id, "cmpl-1");
        assert_eq!(response.content, "Hi!");
    }

    #[tokio::test]
    async fn api_error_message_is_surfaced_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {"message": "rate limited"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = provider(&server).complete(request()).await.unwrap_err();
        assert!(matches!(err, MoodlineError::Provider { .. }));
        assert!(err.to_string().contains("rate limited"), "got: {err}");
    }

    #[tokio::test]
    async fn empty_choices_is_a_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let err = provider(&server).complete(request()).await.unwrap_err();
        assert!(err.to_string().contains("no message content"), "got: {err}");
    }

    #[tokio::test]
    async fn non_json_body_is_a_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = provider(&server).complete(request()).await.unwrap_err();
        assert!(err.to_string().contains("failed to parse API response"), "got: {err}");
    }

    #[tokio::test]
    async fn configured_timeout_bounds_the_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(500))
                    .set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let p = FireworksProvider::new(
            "fw-test",
            &format!("{}/inference/v1", server.uri()),
            Some(Duration::from_millis(50)),
        )
        .unwrap();
        let err = p.complete(request()).await.unwrap_err();
        assert!(err.to_string().contains("HTTP request failed"), "got: {err}");
    }
}
