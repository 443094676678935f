// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recovers a JSON value from model output that may not be clean JSON.
//!
//! Strategies run in order and the first successful parse wins:
//!
//! 1. the whole text,
//! 2. the body of a fenced code block (optional `json` tag),
//! 3. the span from the first `{` to the last `}`,
//! 4. that span (or the whole text) with trailing commas removed,
//! 5. the same input after full repair: trailing commas removed, bare keys
//!    quoted, bare non-numeric scalars quoted.
//!
//! Repairs only touch text outside string literals.

use std::sync::LazyLock;

use moodline_core::error::MoodlineError;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// Characters of the raw text kept in a [`MoodlineError::MalformedResponse`].
const EXCERPT_CHARS: usize = 120;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").expect("valid regex")
});

/// Parses `text` with the recovery ladder described in the module docs.
pub fn extract_json(text: &str) -> Result<Value, MoodlineError> {
    if let Ok(value) = serde_json::from_str(text) {
        return Ok(value);
    }

    if let Some(body) = CODE_FENCE.captures(text).and_then(|c| c.get(1))
        && let Ok(value) = serde_json::from_str(body.as_str().trim())
    {
        debug!("recovered JSON from code fence");
        return Ok(value);
    }

    let span = object_span(text);
    if let Some(span) = span
        && let Ok(value) = serde_json::from_str(span)
    {
        debug!("recovered JSON from brace span");
        return Ok(value);
    }

    let candidate = span.unwrap_or(text);
    if let Ok(value) = serde_json::from_str(&strip_trailing_commas(candidate)) {
        debug!("recovered JSON after removing trailing commas");
        return Ok(value);
    }

    match serde_json::from_str(&repair(candidate)) {
        Ok(value) => {
            debug!("recovered JSON after repair");
            Ok(value)
        }
        Err(_) => Err(MoodlineError::MalformedResponse {
            excerpt: text.chars().take(EXCERPT_CHARS).collect(),
        }),
    }
}

/// The slice from the first `{` through the last `}`.
fn object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Drops every comma that directly precedes `}` or `]`.
pub fn strip_trailing_commas(text: &str) -> String {
    Repairer::new(text, false).run()
}

/// Drops trailing commas and quotes bare keys and bare non-numeric scalars.
pub fn repair(text: &str) -> String {
    Repairer::new(text, true).run()
}

/// What the scanner expects next outside a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Key,
    Value,
    Other,
}

/// Single pass over the text that copies string literals verbatim.
struct Repairer {
    chars: Vec<char>,
    quote_bare: bool,
    out: String,
}

impl Repairer {
    fn new(text: &str, quote_bare: bool) -> Self {
        Self {
            chars: text.chars().collect(),
            quote_bare,
            out: String::with_capacity(text.len() + 16),
        }
    }

    fn run(mut self) -> String {
        let mut slot = Slot::Other;
        let mut i = 0;
        while i < self.chars.len() {
            let c = self.chars[i];
            match c {
                '"' => {
                    let end = self.string_end(i);
                    self.out.extend(&self.chars[i..end]);
                    i = end;
                    slot = Slot::Other;
                    continue;
                }
                ',' => {
                    if matches!(self.next_significant(i + 1), Some('}' | ']')) {
                        i += 1;
                        continue;
                    }
                    self.out.push(c);
                    slot = Slot::Key;
                }
                '{' => {
                    self.out.push(c);
                    slot = Slot::Key;
                }
                ':' => {
                    self.out.push(c);
                    slot = Slot::Value;
                }
                c if c.is_whitespace() => self.out.push(c),
                c if self.quote_bare && slot == Slot::Key && is_ident_start(c) => {
                    i = self.bare_key(i);
                    slot = Slot::Other;
                    continue;
                }
                c if self.quote_bare && slot == Slot::Value && !matches!(c, '[' | '{' | '}' | ']') => {
                    i = self.bare_value(i);
                    slot = Slot::Other;
                    continue;
                }
                _ => {
                    self.out.push(c);
                    slot = Slot::Other;
                }
            }
            i += 1;
        }
        self.out
    }

    /// Index just past the string literal opening at `start`.
    fn string_end(&self, start: usize) -> usize {
        let mut i = start + 1;
        while i < self.chars.len() {
            match self.chars[i] {
                '\\' => i += 2,
                '"' => return i + 1,
                _ => i += 1,
            }
        }
        self.chars.len()
    }

    fn next_significant(&self, from: usize) -> Option<char> {
        self.chars[from.min(self.chars.len())..]
            .iter()
            .copied()
            .find(|c| !c.is_whitespace())
    }

    /// Copies an identifier, quoted when a `:` follows it.
    fn bare_key(&mut self, start: usize) -> usize {
        let mut end = start;
        while end < self.chars.len() && (self.chars[end].is_alphanumeric() || self.chars[end] == '_') {
            end += 1;
        }
        let ident: String = self.chars[start..end].iter().collect();
        if self.next_significant(end) == Some(':') {
            self.out.push('"');
            self.out.push_str(&ident);
            self.out.push('"');
        } else {
            self.out.push_str(&ident);
        }
        end
    }

    /// Copies a scalar up to the next `,`, `}`, `]` or newline, quoting it
    /// unless it is a number or a JSON literal.
    fn bare_value(&mut self, start: usize) -> usize {
        let mut end = start;
        while end < self.chars.len() && !matches!(self.chars[end], ',' | '}' | ']' | '\n') {
            end += 1;
        }
        let raw: String = self.chars[start..end].iter().collect();
        let value = raw.trim_end();
        if is_json_literal(value) {
            self.out.push_str(value);
        } else {
            self.out.push_str(&Value::String(value.to_string()).to_string());
        }
        self.out.push_str(&raw[value.len()..]);
        end
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_json_literal(value: &str) -> bool {
    matches!(value, "true" | "false" | "null")
        || serde_json::from_str::<serde_json::Number>(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn score_of(text: &str) -> f64 {
        extract_json(text).unwrap()["score"].as_f64().unwrap()
    }

    #[test]
    fn parses_clean_json() {
        assert_eq!(score_of(r#"{"score":0.5}"#), 0.5);
    }

    #[test]
    fn parses_fenced_json() {
        assert_eq!(score_of("```json\n{\"score\":0.5}\n```"), 0.5);
        assert_eq!(score_of("Here you go:\n```\n{\"score\":0.5}\n```\nThanks"), 0.5);
    }

    #[test]
    fn parses_brace_span_inside_prose() {
        assert_eq!(score_of(r#"Some preamble {"score":0.5} trailing"#), 0.5);
    }

    #[test]
    fn repairs_trailing_comma() {
        assert_eq!(extract_json(r#"{"score":0.5,}"#).unwrap(), json!({"score": 0.5}));
        assert_eq!(
            extract_json(r#"{"themes":["work","family",],}"#).unwrap(),
            json!({"themes": ["work", "family"]})
        );
    }

    #[test]
    fn trailing_comma_removal_leaves_string_contents_alone() {
        let value =
            extract_json(r#"{"score": -0.5, "analysis": "Tone, overall: negative",}"#).unwrap();
        assert_eq!(value, json!({"score": -0.5, "analysis": "Tone, overall: negative"}));
    }

    #[test]
    fn full_repair_does_not_rewrite_inside_strings() {
        let value =
            extract_json(r#"{score: 0.2, "analysis": "Mixed, mostly: calm, [ok]", tone: mild,}"#)
                .unwrap();
        assert_eq!(
            value,
            json!({"score": 0.2, "analysis": "Mixed, mostly: calm, [ok]", "tone": "mild"})
        );
    }

    #[test]
    fn strip_trailing_commas_skips_escaped_quotes() {
        let stripped = strip_trailing_commas(r#"{"a": "say \"hi,\" ]", }"#);
        assert_eq!(stripped, r#"{"a": "say \"hi,\" ]" }"#);
    }

    #[test]
    fn repairs_bare_keys_and_scalars() {
        let value = extract_json("{score: -0.4, source: generative, analysis: feeling low,}").unwrap();
        assert_eq!(
            value,
            json!({"score": -0.4, "source": "generative", "analysis": "feeling low"})
        );
    }

    #[test]
    fn repair_keeps_numbers_and_literals_unquoted() {
        let value = extract_json(
            "Result: {\"urgency\": 0.2, \"crisis\": false, \"note\": null, \"mood\": calm\n}",
        )
        .unwrap();
        assert_eq!(value["urgency"], json!(0.2));
        assert_eq!(value["crisis"], json!(false));
        assert_eq!(value["note"], Value::Null);
        assert_eq!(value["mood"], json!("calm"));
    }

    #[test]
    fn nested_objects_survive_repair() {
        let value =
            extract_json("{score: 0.1, features: {urgency: 0.3, themes: [\"work\"],},}").unwrap();
        assert_eq!(value["features"]["urgency"], json!(0.3));
        assert_eq!(value["features"]["themes"], json!(["work"]));
    }

    #[test]
    fn unrecoverable_text_is_malformed() {
        let err = extract_json("I'm sorry, I can't help with that.").unwrap_err();
        match err {
            MoodlineError::MalformedResponse { excerpt } => {
                assert!(excerpt.starts_with("I'm sorry"));
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn excerpt_is_truncated() {
        let long = "x".repeat(1000);
        let Err(MoodlineError::MalformedResponse { excerpt }) = extract_json(&long) else {
            panic!("expected MalformedResponse");
        };
        assert_eq!(excerpt.len(), EXCERPT_CHARS);
    }
}
