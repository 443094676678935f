// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! Network adapters extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch. The local [`TextAnalyzer`] is
//! synchronous and pure.

pub mod adapter;
pub mod analyzer;
pub mod classifier;
pub mod provider;

pub use adapter::PluginAdapter;
pub use analyzer::TextAnalyzer;
pub use classifier::SentimentClassifier;
pub use provider::CompletionProvider;
