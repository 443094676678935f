// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process text analyzer trait.

use crate::error::MoodlineError;
use crate::types::{LocalAnalysis, TextFeatures};

/// Deterministic local analysis: polarity score and heuristic features.
///
/// The fallible signature lets the orchestrator's failure boundary be
/// exercised with injected faults; the lexicon implementation never errors.
pub trait TextAnalyzer: Send + Sync + 'static {
    /// Scores the text and extracts its features.
    fn analyze(&self, text: &str) -> Result<LocalAnalysis, MoodlineError>;

    /// Extracts features only, independent of any score.
    fn extract_features(&self, text: &str) -> Result<TextFeatures, MoodlineError>;
}
