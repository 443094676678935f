// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hosted binary sentiment classifier trait.

use async_trait::async_trait;

use crate::traits::adapter::PluginAdapter;

/// A remote classifier that turns text into a signed score.
///
/// Implementations never fail: a missing credential, transport error,
/// timeout, or unexpected payload all yield `None`, which the orchestrator
/// treats as "try the next provider".
#[async_trait]
pub trait SentimentClassifier: PluginAdapter {
    async fn classify(&self, text: &str) -> Option<f64>;
}
