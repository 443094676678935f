// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed keyword tables used by feature extraction.
//!
//! Coarse lists are compared token-for-token (exact, lower-cased). The
//! fine-grained emotion table and the crisis phrases are matched as
//! substrings of the lower-cased text.

pub const POSITIVE_WORDS: &[&str] = &[
    "happy", "joy", "excited", "great", "wonderful", "amazing", "love", "like",
];

pub const NEGATIVE_WORDS: &[&str] = &["sad", "angry", "hate", "bad", "terrible", "awful", "worst"];

pub const ANXIETY_WORDS: &[&str] = &["anxious", "worry", "nervous", "stress", "overwhelmed"];

/// Urgency triggers; each occurrence adds 0.3.
pub const URGENCY_WORDS: &[&str] = &["urgent", "asap", "immediately", "now"];

/// Theme tag and the tokens that indicate it, in reporting order.
pub const THEMES: &[(&str, &[&str])] = &[
    ("work", &["work", "job", "office"]),
    ("family", &["family", "mom", "dad", "sister", "brother"]),
    ("friends", &["friend", "friends", "buddy", "pal"]),
    ("education", &["school", "class", "study", "exam"]),
];

/// Fine-grained emotion name and its keywords.
pub const FINE_EMOTIONS: &[(&str, &[&str])] = &[
    (
        "joy",
        &["happy", "joyful", "elated", "cheerful", "delighted", "euphoric", "ecstatic", "blissful"],
    ),
    (
        "love",
        &["love", "adore", "cherish", "treasure", "appreciate", "grateful", "thankful", "blessed"],
    ),
    (
        "excitement",
        &["excited", "thrilled", "pumped", "energized", "enthusiastic", "eager", "animated"],
    ),
    (
        "sadness",
        &["sad", "depressed", "down", "blue", "melancholy", "sorrowful", "dejected", "despondent"],
    ),
    (
        "anger",
        &["angry", "mad", "furious", "irritated", "annoyed", "frustrated", "enraged", "livid"],
    ),
    (
        "fear",
        &["afraid", "scared", "anxious", "worried", "nervous", "terrified", "panicked", "frightened"],
    ),
];

/// Phrases that indicate a possible crisis.
pub const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "don't want to live",
    "worthless",
    "hopeless",
    "can't go on",
    "better off dead",
    "want to die",
    "self harm",
    "hurt myself",
    "cut myself",
    "overdose",
    "jump",
    "hanging",
];

/// Words skipped by keyword extraction.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "but", "for", "are", "with", "this", "that", "have", "will",
];
