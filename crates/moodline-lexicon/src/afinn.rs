// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Word polarity lexicon, AFINN-165 valences in [-5, 5].
//!
//! Restricted to vocabulary that shows up in personal journaling. Entries
//! are stemmed once when the analyzer is built; tokens are compared by stem.

/// `(word, valence)` pairs.
pub const LEXICON: &[(&str, i32)] = &[
    // --- strongly positive ---
    ("amazing", 4),
    ("awesome", 4),
    ("breathtaking", 5),
    ("ecstatic", 4),
    ("euphoric", 4),
    ("fantastic", 4),
    ("fun", 4),
    ("heavenly", 4),
    ("outstanding", 5),
    ("superb", 5),
    ("thrilled", 5),
    ("wonderful", 4),
    ("win", 4),
    ("winning", 4),
    // --- positive ---
    ("accomplished", 2),
    ("appreciate", 2),
    ("beautiful", 3),
    ("best", 3),
    ("better", 2),
    ("blessed", 2),
    ("blissful", 3),
    ("brave", 2),
    ("calm", 2),
    ("care", 2),
    ("celebrate", 3),
    ("cheerful", 2),
    ("comfort", 2),
    ("confident", 2),
    ("content", 2),
    ("delighted", 3),
    ("eager", 2),
    ("easy", 1),
    ("encouraged", 2),
    ("energetic", 2),
    ("enjoy", 2),
    ("enthusiastic", 3),
    ("excellent", 3),
    ("excited", 3),
    ("fine", 2),
    ("free", 1),
    ("friendly", 2),
    ("glad", 3),
    ("good", 3),
    ("grateful", 3),
    ("great", 3),
    ("happy", 3),
    ("healthy", 2),
    ("help", 2),
    ("hope", 2),
    ("hopeful", 2),
    ("improve", 2),
    ("inspired", 2),
    ("joy", 3),
    ("joyful", 3),
    ("kind", 2),
    ("laugh", 1),
    ("like", 2),
    ("love", 3),
    ("loved", 3),
    ("lucky", 3),
    ("nice", 3),
    ("ok", 2),
    ("okay", 2),
    ("optimistic", 2),
    ("peaceful", 2),
    ("pleased", 3),
    ("positive", 2),
    ("pretty", 1),
    ("productive", 2),
    ("proud", 2),
    ("relaxed", 2),
    ("relief", 1),
    ("rest", 2),
    ("safe", 1),
    ("satisfied", 2),
    ("smile", 2),
    ("strong", 2),
    ("success", 2),
    ("successful", 3),
    ("support", 2),
    ("thank", 2),
    ("thankful", 2),
    ("thanks", 2),
    ("warm", 1),
    ("well", 2),
    ("yes", 1),
    // --- negative ---
    ("abandoned", -2),
    ("afraid", -2),
    ("alone", -2),
    ("angry", -3),
    ("annoyed", -2),
    ("anxious", -2),
    ("ashamed", -2),
    ("bad", -3),
    ("bored", -2),
    ("broken", -1),
    ("burden", -2),
    ("confused", -2),
    ("cry", -1),
    ("crying", -2),
    ("dead", -3),
    ("depressed", -2),
    ("despair", -3),
    ("die", -3),
    ("disappointed", -2),
    ("disappointing", -2),
    ("exhausted", -2),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("fear", -2),
    ("frustrated", -2),
    ("frustration", -2),
    ("grief", -2),
    ("guilty", -3),
    ("hard", -1),
    ("hate", -3),
    ("helpless", -2),
    ("hopeless", -2),
    ("hurt", -2),
    ("ill", -2),
    ("isolated", -1),
    ("jealous", -2),
    ("kill", -3),
    ("lonely", -2),
    ("lose", -3),
    ("lost", -3),
    ("mad", -3),
    ("miserable", -3),
    ("miss", -2),
    ("nervous", -2),
    ("overwhelmed", -2),
    ("pain", -2),
    ("panic", -3),
    ("problem", -2),
    ("regret", -2),
    ("rejected", -1),
    ("sad", -2),
    ("scared", -2),
    ("sick", -2),
    ("sorry", -1),
    ("stress", -1),
    ("stressed", -2),
    ("struggle", -2),
    ("suffer", -2),
    ("suicide", -2),
    ("tired", -2),
    ("trouble", -2),
    ("ugly", -3),
    ("unhappy", -2),
    ("upset", -2),
    ("useless", -2),
    ("weak", -2),
    ("worried", -3),
    ("worry", -3),
    ("worse", -3),
    ("worthless", -2),
    ("wrong", -2),
    // --- strongly negative ---
    ("awful", -3),
    ("devastated", -2),
    ("disaster", -2),
    ("furious", -3),
    ("horrible", -3),
    ("terrible", -3),
    ("terrified", -3),
    ("torture", -4),
    ("worst", -3),
];

/// Tokens that flip the sign of every later lexicon hit in the same text.
pub const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nobody", "none", "nothing", "nowhere", "cannot",
];
