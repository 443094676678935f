// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Word tokenization.

/// Splits lower-cased text into runs of alphanumeric characters and `_`.
///
/// Everything else (whitespace, punctuation, apostrophes) separates tokens,
/// so `"don't"` yields `["don", "t"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_lowercases() {
        assert_eq!(
            tokenize("Work was GREAT, but... I'm tired!"),
            vec!["work", "was", "great", "but", "i", "m", "tired"]
        );
    }

    #[test]
    fn empty_and_symbol_only_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("!!! ... ???").is_empty());
    }

    #[test]
    fn keeps_digits_and_underscores() {
        assert_eq!(tokenize("day_2 of 30"), vec!["day_2", "of", "30"]);
    }
}
