// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion provider trait for chat-style language model APIs.

use async_trait::async_trait;

use crate::error::MoodlineError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{CompletionRequest, CompletionResponse};

/// Adapter for chat-completion endpoints.
#[async_trait]
pub trait CompletionProvider: PluginAdapter {
    /// Sends a completion request and returns the full response text.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, MoodlineError>;
}
