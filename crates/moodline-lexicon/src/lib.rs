// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local lexicon sentiment analyzer for Moodline.
//!
//! Scores text by summing word valences from a fixed lexicon (compared by
//! English stem) and dividing by a fixed divisor. Feature extraction is
//! keyword-driven and independent of the score. Everything here is pure and
//! deterministic; no network, no shared mutable state.

pub mod afinn;
pub mod features;
pub mod keywords;
pub mod tokenizer;

use std::collections::HashMap;
use std::sync::LazyLock;

use moodline_config::model::LexiconConfig;
use moodline_core::{LocalAnalysis, MoodlineError, TextAnalyzer, TextFeatures};
use rust_stemmers::{Algorithm, Stemmer};
use tracing::debug;

pub use features::{detect_crisis_phrases, detect_emotions, extract_features, extract_keywords};
pub use tokenizer::tokenize;

/// Lexicon keyed by stem. When two words share a stem the first entry wins.
static STEMMED_LEXICON: LazyLock<HashMap<String, i32>> = LazyLock::new(|| {
    let stemmer = Stemmer::create(Algorithm::English);
    let mut map = HashMap::with_capacity(afinn::LEXICON.len());
    for (word, valence) in afinn::LEXICON {
        map.entry(stemmer.stem(word).into_owned())
            .or_insert(*valence);
    }
    map
});

/// Deterministic lexicon analyzer.
pub struct LexiconAnalyzer {
    stemmer: Stemmer,
    score_divisor: f64,
}

impl std::fmt::Debug for LexiconAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexiconAnalyzer")
            .field("score_divisor", &self.score_divisor)
            .finish_non_exhaustive()
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::from_config(&LexiconConfig::default())
    }
}

impl LexiconAnalyzer {
    pub fn from_config(config: &LexiconConfig) -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            score_divisor: config.score_divisor,
        }
    }

    /// Scores `text` and extracts its features.
    ///
    /// The score is `sum(valence) / divisor` and is not clamped. A non-finite
    /// score (only reachable with a degenerate divisor) yields
    /// [`LocalAnalysis::empty`].
    pub fn analyze_local(&self, text: &str) -> LocalAnalysis {
        let tokens = tokenize(text);
        let score = self.raw_polarity(&tokens) / self.score_divisor;
        if !score.is_finite() {
            debug!(divisor = self.score_divisor, "non-finite lexicon score, returning empty analysis");
            return LocalAnalysis::empty();
        }

        LocalAnalysis {
            score,
            features: features::features_from_tokens(text, &tokens),
        }
    }

    /// Sum of matched valences. A negator flips the sign of every later hit.
    fn raw_polarity(&self, tokens: &[String]) -> f64 {
        let mut sign = 1;
        let mut total = 0;
        for token in tokens {
            if afinn::NEGATORS.contains(&token.as_str()) {
                sign = -1;
                continue;
            }
            if let Some(valence) = STEMMED_LEXICON.get(self.stemmer.stem(token).as_ref()) {
                total += sign * valence;
            }
        }
        f64::from(total)
    }
}

impl TextAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Result<LocalAnalysis, MoodlineError> {
        Ok(self.analyze_local(text))
    }

    fn extract_features(&self, text: &str) -> Result<TextFeatures, MoodlineError> {
        Ok(extract_features(text))
    }
}
