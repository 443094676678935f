// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static crisis resources served when the generative provider is unavailable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotline {
    pub name: String,
    pub number: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// The fixed hotline and resource list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisResources {
    pub hotlines: Vec<Hotline>,
    pub resources: Vec<Resource>,
    /// Country -> hotline description.
    pub international: BTreeMap<String, String>,
    pub message: String,
}

/// Crisis support as returned to callers: model-generated JSON, or the static list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CrisisSupport {
    Generated(Value),
    Static(CrisisResources),
}

impl CrisisSupport {
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }
}

fn hotline(name: &str, number: &str, website: &str) -> Hotline {
    Hotline {
        name: name.into(),
        number: number.into(),
        website: website.into(),
    }
}

fn resource(title: &str, description: &str, url: &str) -> Resource {
    Resource {
        title: title.into(),
        description: description.into(),
        url: url.into(),
    }
}

pub fn static_crisis_resources() -> CrisisResources {
    CrisisResources {
        hotlines: vec![
            hotline(
                "National Suicide Prevention Lifeline",
                "988",
                "https://988lifeline.org/",
            ),
            hotline(
                "Crisis Text Line",
                "Text HOME to 741741",
                "https://www.crisistextline.org/",
            ),
            hotline(
                "Veterans Crisis Line",
                "1-800-273-8255, Press 1",
                "https://www.veteranscrisisline.net/",
            ),
        ],
        resources: vec![
            resource(
                "Find a Therapist",
                "Find licensed therapists in your area",
                "https://www.psychologytoday.com/",
            ),
            resource(
                "Mental Health America",
                "Resources and screening tools",
                "https://www.mhanational.org/",
            ),
        ],
        international: BTreeMap::from([
            ("australia".to_string(), "13 11 14 (Lifeline Australia)".to_string()),
            ("canada".to_string(), "1-833-456-4566 (Talk Suicide Canada)".to_string()),
            ("uk".to_string(), "116 123 (Samaritans)".to_string()),
        ]),
        message: "You are not alone. Help is available, and recovery is possible.".to_string(),
    }
}
