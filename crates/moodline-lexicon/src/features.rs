// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic feature extraction, independent of the polarity score.

use std::collections::BTreeMap;

use moodline_core::TextFeatures;

use crate::keywords::{
    ANXIETY_WORDS, CRISIS_PHRASES, FINE_EMOTIONS, NEGATIVE_WORDS, POSITIVE_WORDS, STOP_WORDS,
    THEMES, URGENCY_WORDS,
};
use crate::tokenizer::tokenize;

/// Maximum number of keywords returned by [`extract_keywords`].
const MAX_KEYWORDS: usize = 10;

/// Extracts word count, coarse emotion counts, themes, urgency, and crisis phrases.
pub fn extract_features(text: &str) -> TextFeatures {
    let tokens = tokenize(text);
    features_from_tokens(text, &tokens)
}

pub(crate) fn features_from_tokens(text: &str, tokens: &[String]) -> TextFeatures {
    let count_in = |list: &[&str]| tokens.iter().filter(|t| list.contains(&t.as_str())).count();

    let emotions = BTreeMap::from([
        ("positive".to_string(), count_in(POSITIVE_WORDS) as f64),
        ("negative".to_string(), count_in(NEGATIVE_WORDS) as f64),
        ("anxiety".to_string(), count_in(ANXIETY_WORDS) as f64),
    ]);

    let themes = THEMES
        .iter()
        .filter(|(_, words)| tokens.iter().any(|t| words.contains(&t.as_str())))
        .map(|(theme, _)| theme.to_string())
        .collect();

    let urgent_words = count_in(URGENCY_WORDS) as f64;
    let exclamations = text.matches('!').count() as f64;
    let urgency = (urgent_words * 0.3 + exclamations * 0.1).min(1.0);

    TextFeatures {
        word_count: tokens.len(),
        emotions,
        themes,
        urgency,
        crisis_phrases: detect_crisis_phrases(text),
    }
}

/// Crisis phrases contained in the text, in table order.
pub fn detect_crisis_phrases(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    CRISIS_PHRASES
        .iter()
        .filter(|phrase| lower.contains(*phrase))
        .map(|phrase| phrase.to_string())
        .collect()
}

/// Counts fine-grained emotion keywords (`joy`, `love`, `excitement`,
/// `sadness`, `anger`, `fear`) by substring match.
///
/// Each keyword counts at most once regardless of how often it appears.
pub fn detect_emotions(text: &str) -> BTreeMap<String, usize> {
    let lower = text.to_lowercase();
    FINE_EMOTIONS
        .iter()
        .map(|(emotion, keywords)| {
            let hits = keywords.iter().filter(|k| lower.contains(*k)).count();
            (emotion.to_string(), hits)
        })
        .collect()
}

/// The first ten whitespace-separated words longer than three characters
/// that are not stop words.
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > 3 && !STOP_WORDS.contains(word))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}
