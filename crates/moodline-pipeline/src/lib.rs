// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Orchestration layer for Moodline.
//!
//! - [`SentimentOrchestrator`]: hosted classifier, then local lexicon, behind
//!   a failure boundary; plus concurrent batch analysis.
//! - [`RuleBasedResponder`]: tiered, profile-driven supportive messages.
//! - [`Pipeline`]: generative provider first, the two above on any failure.
//!
//! Nothing in this crate returns an error to its caller once constructed.

pub mod crisis;
pub mod orchestrator;
pub mod pipeline;
pub mod responder;

pub use crisis::{CrisisResources, CrisisSupport, static_crisis_resources};
pub use orchestrator::SentimentOrchestrator;
pub use pipeline::{EntryAnnotation, Pipeline, PipelineOutcome, ProviderHealth, TextInsights};
pub use responder::{
    COMPANION, CrisisRule, JOURNAL, JOURNAL_CRISIS_MESSAGE, ResponderProfile, RuleBasedResponder,
};
