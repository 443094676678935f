// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock chat-completion provider with a scripted reply queue.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use moodline_core::MoodlineError;
use moodline_core::traits::{CompletionProvider, PluginAdapter};
use moodline_core::types::{
    AdapterType, CompletionRequest, CompletionResponse, HealthStatus,
};

/// One scripted outcome of [`MockCompletionProvider::complete`].
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    /// Fails with a [`MoodlineError::Provider`] carrying this message.
    Fail(String),
}

/// A completion provider that replays queued replies in FIFO order.
///
/// When the queue is empty it returns `"mock response"`. Every request is
/// recorded so tests can assert on prompts and sampling parameters.
#[derive(Clone, Default)]
pub struct MockCompletionProvider {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-loads successful text replies.
    pub fn with_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_replies(texts.into_iter().map(|t| MockReply::Text(t.into())))
    }

    pub fn with_replies(replies: impl IntoIterator<Item = MockReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into_iter().collect())),
            requests: Arc::default(),
        }
    }

    /// A provider whose every call fails.
    pub fn failing(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::with_replies(std::iter::repeat_n(MockReply::Fail(message), 64))
    }

    pub async fn push(&self, reply: MockReply) {
        self.replies.lock().await.push_back(reply);
    }

    /// Requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl PluginAdapter for MockCompletionProvider {
    fn name(&self) -> &str {
        "mock-completion"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Completion
    }

    async fn health_check(&self) -> Result<HealthStatus, MoodlineError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, MoodlineError> {
        let model = request.model.clone();
        self.requests.lock().await.push(request);

        let reply = self
            .replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| MockReply::Text("mock response".to_string()));

        match reply {
            MockReply::Text(content) => Ok(CompletionResponse {
                id: format!("mock-{}", uuid::Uuid::new_v4()),
                content,
                model,
            }),
            MockReply::Fail(message) => Err(MoodlineError::Provider {
                message,
                source: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "test-model".into(),
            messages: vec![],
            temperature: 0.5,
            max_tokens: 16,
        }
    }

    #[tokio::test]
    async fn default_reply_when_queue_empty() {
        let provider = MockCompletionProvider::new();
        let response = provider.complete(request()).await.unwrap();
        assert_eq!(response.content, "mock response");
        assert_eq!(response.model, "test-model");
    }

    #[tokio::test]
    async fn replies_are_fifo_and_requests_recorded() {
        let provider = MockCompletionProvider::with_replies([
            MockReply::Text("first".into()),
            MockReply::Fail("boom".into()),
        ]);
        assert_eq!(provider.complete(request()).await.unwrap().content, "first");
        let err = provider.complete(request()).await.unwrap_err();
        assert!(err.to_string().contains("boom"));
        assert_eq!(provider.requests().await.len(), 2);
    }

    #[tokio::test]
    async fn failing_provider_always_fails() {
        let provider = MockCompletionProvider::failing("down");
        for _ in 0..3 {
            assert!(provider.complete(request()).await.is_err());
        }
    }
}
