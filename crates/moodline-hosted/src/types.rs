// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the hosted classification API.

use serde::{Deserialize, Serialize};

/// Request body: `{"inputs": "<text>"}`.
#[derive(Debug, Serialize)]
pub struct ClassifyRequest<'a> {
    pub inputs: &'a str,
}

/// One label/probability pair from the classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// Response body: one inner array of label scores per input.
pub type ClassifyResponse = Vec<Vec<LabelScore>>;

/// Collapses a classifier response into `POSITIVE - NEGATIVE`.
///
/// Both labels must be present, spelled exactly; any other shape has no
/// polarity.
pub fn polarity(response: &ClassifyResponse) -> Option<f64> {
    let labels = response.first()?;
    let find = |wanted: &str| labels.iter().find(|l| l.label == wanted).map(|l| l.score);

    Some(find("POSITIVE")? - find("NEGATIVE")?)
}
