// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tiered rule-based responder.
//!
//! One component, parameterized by a [`ResponderProfile`]: a crisis rule, an
//! ordered tier table, and per-category message pools. Two profiles ship:
//! [`JOURNAL`] (mood-only buckets, crisis below -0.7 sentiment) and
//! [`COMPANION`] (mood-or-sentiment tiers, crisis at mood <= 2 or sentiment
//! <= -0.8). Crisis always wins and is never randomized or decorated.

use moodline_config::model::ResponderProfileName;
use moodline_core::types::{JournalInput, ResponseCategory, ResponseResult, ResponseSource};
use rand::Rng;
use rand::seq::SliceRandom;

/// Named crisis policies. Both exist because different entry points use
/// different sensitivities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrisisRule {
    /// Crisis when `sentiment < threshold`.
    SentimentBelow(f64),
    /// Crisis when `mood <= mood_at_most` or `sentiment <= sentiment_at_most`.
    MoodOrSentiment {
        mood_at_most: u8,
        sentiment_at_most: f64,
    },
}

impl CrisisRule {
    pub fn triggers(&self, mood: Option<u8>, sentiment: f64) -> bool {
        match *self {
            Self::SentimentBelow(threshold) => sentiment < threshold,
            Self::MoodOrSentiment {
                mood_at_most,
                sentiment_at_most,
            } => mood.is_some_and(|m| m <= mood_at_most) || sentiment <= sentiment_at_most,
        }
    }
}

/// One side of a tier condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    AtLeast(f64),
    AtMost(f64),
}

impl Bound {
    fn holds(self, value: f64) -> bool {
        match self {
            Self::AtLeast(b) => value >= b,
            Self::AtMost(b) => value <= b,
        }
    }
}

/// A tier matches when either its mood bound or its sentiment bound holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub category: ResponseCategory,
    pub mood: Option<Bound>,
    pub sentiment: Option<Bound>,
}

impl Tier {
    const fn mood(category: ResponseCategory, bound: Bound) -> Self {
        Self {
            category,
            mood: Some(bound),
            sentiment: None,
        }
    }

    const fn either(category: ResponseCategory, mood: Bound, sentiment: Bound) -> Self {
        Self {
            category,
            mood: Some(mood),
            sentiment: Some(sentiment),
        }
    }

    fn matches(&self, mood: Option<u8>, sentiment: f64) -> bool {
        let mood_hit = matches!((self.mood, mood), (Some(b), Some(m)) if b.holds(f64::from(m)));
        let sentiment_hit = self.sentiment.is_some_and(|b| b.holds(sentiment));
        mood_hit || sentiment_hit
    }
}

/// Threshold table, crisis policy, and message pools for one responder flavor.
#[derive(Debug)]
pub struct ResponderProfile {
    pub name: &'static str,
    pub crisis_rule: CrisisRule,
    pub crisis_message: &'static str,
    /// Evaluated in order; the first match wins.
    pub tiers: &'static [Tier],
    /// Category when no tier matches.
    pub otherwise: ResponseCategory,
    /// Mood assumed for tier selection when none was reported.
    pub default_mood: Option<u8>,
    pub pools: &'static [(ResponseCategory, &'static [&'static str])],
}

impl ResponderProfile {
    pub fn by_name(name: ResponderProfileName) -> &'static Self {
        match name {
            ResponderProfileName::Journal => &JOURNAL,
            ResponderProfileName::Companion => &COMPANION,
        }
    }

    /// Messages for `category`; empty for categories the profile has no pool for.
    pub fn pool(&self, category: ResponseCategory) -> &'static [&'static str] {
        self.pools
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, pool)| *pool)
            .unwrap_or_default()
    }
}

pub const JOURNAL_CRISIS_MESSAGE: &str = "I'm really concerned about how you're feeling right now. \
If you're having thoughts of harming yourself, please reach out to a crisis helpline immediately. \
You're not alone, and help is available. National Suicide Prevention Lifeline: 988 (US) or your \
local crisis hotline.";

pub const COMPANION_CRISIS_MESSAGE: &str = "Your life has value and meaning. Please reach out to \
the 988 Suicide & Crisis Lifeline (call or text 988 in the US), text HOME to 741741, or contact \
emergency services if you're in immediate danger.";

/// Used if a pool is unexpectedly empty.
const LAST_RESORT_MESSAGE: &str = "Thank you for sharing your thoughts with me.";

pub static JOURNAL: ResponderProfile = ResponderProfile {
    name: "journal",
    crisis_rule: CrisisRule::SentimentBelow(-0.7),
    crisis_message: JOURNAL_CRISIS_MESSAGE,
    tiers: &[
        Tier::mood(ResponseCategory::High, Bound::AtLeast(8.0)),
        Tier::mood(ResponseCategory::MediumHigh, Bound::AtLeast(6.0)),
        Tier::mood(ResponseCategory::Neutral, Bound::AtLeast(4.0)),
        Tier::mood(ResponseCategory::Low, Bound::AtLeast(2.0)),
    ],
    otherwise: ResponseCategory::VeryLow,
    default_mood: Some(5),
    pools: &[
        (
            ResponseCategory::High,
            &[
                "I'm so glad to hear you're feeling great! Your positive energy really shines through in your writing. Keep embracing these wonderful moments!",
                "What a fantastic mood you're in! It's wonderful to see you feeling so uplifted. These positive experiences are worth celebrating.",
                "Your enthusiasm is contagious! It's clear you're having a great day. Remember to savor these happy moments.",
                "I love your positive outlook! You're radiating good vibes. Keep spreading that joy around!",
            ],
        ),
        (
            ResponseCategory::MediumHigh,
            &[
                "You seem to be in a pretty good place today. That's wonderful! What do you think contributed to this positive feeling?",
                "It sounds like you're having a solid day. I appreciate your balanced perspective on things.",
                "You're doing well! It's nice to see you feeling content and positive about your day.",
                "Good vibes coming through! You seem to be in a comfortable, positive space.",
            ],
        ),
        (
            ResponseCategory::Neutral,
            &[
                "I hear you. Sometimes days are just... days. How are you feeling about everything right now?",
                "It sounds like you're in a reflective space today. That's totally normal and healthy.",
                "You seem to be processing things thoughtfully. Is there anything specific on your mind?",
                "I appreciate your honest reflection. Sometimes neutral days give us space to think and grow.",
            ],
        ),
        (
            ResponseCategory::Low,
            &[
                "I can sense you're having a tough time. It's okay to not be okay. What's been challenging for you?",
                "I hear the struggle in your words. Remember, difficult days don't define you. What might help you feel a bit better?",
                "It sounds like you're going through a rough patch. Be gentle with yourself today. What do you need right now?",
                "I'm sorry you're feeling down. Your feelings are valid. Is there anything that usually helps lift your spirits?",
            ],
        ),
        (
            ResponseCategory::VeryLow,
            &[
                "I can feel how difficult this is for you. Please know that you're not alone, and it's okay to reach out for support. What would feel most helpful right now?",
                "I'm really sorry you're feeling this way. Your pain is real and valid. Have you considered talking to someone you trust about how you're feeling?",
                "I hear how much you're struggling. Please remember that this feeling won't last forever. What small thing might help you feel even slightly better?",
                "I'm concerned about how you're feeling. You deserve support and care. Would you like to talk about what's been going on?",
            ],
        ),
    ],
};

pub static COMPANION: ResponderProfile = ResponderProfile {
    name: "companion",
    crisis_rule: CrisisRule::MoodOrSentiment {
        mood_at_most: 2,
        sentiment_at_most: -0.8,
    },
    crisis_message: COMPANION_CRISIS_MESSAGE,
    tiers: &[
        Tier::either(ResponseCategory::VeryLow, Bound::AtMost(4.0), Bound::AtMost(-0.5)),
        Tier::either(ResponseCategory::Low, Bound::AtMost(5.0), Bound::AtMost(-0.2)),
        Tier::either(ResponseCategory::High, Bound::AtLeast(8.0), Bound::AtLeast(0.5)),
        Tier::either(ResponseCategory::MediumHigh, Bound::AtLeast(6.0), Bound::AtLeast(0.2)),
    ],
    otherwise: ResponseCategory::Neutral,
    default_mood: None,
    pools: &[
        (
            ResponseCategory::High,
            &[
                "I'm so happy to see you feeling this positive! What's been the highlight of your day?",
                "Your energy is wonderful! It's great to see you in such good spirits.",
                "I love seeing you so upbeat! What's contributing to this amazing mood?",
                "This is fantastic! Your positivity is truly inspiring.",
            ],
        ),
        (
            ResponseCategory::MediumHigh,
            &[
                "I'm glad you're feeling good today! What's been going well for you?",
                "It's nice to hear positivity in your words. Keep embracing these good feelings!",
                "Your positive outlook is inspiring! What's been helping you feel this way?",
                "That's wonderful to hear! It sounds like things are looking up.",
            ],
        ),
        (
            ResponseCategory::Neutral,
            &[
                "Thank you for sharing your thoughts with me. How are you taking care of yourself today?",
                "I appreciate you taking time to check in. What's on your mind right now?",
                "It's good that you're staying in touch with your feelings. How can I support you?",
                "Thanks for sharing. Sometimes it's good to just acknowledge where we are.",
            ],
        ),
        (
            ResponseCategory::Low,
            &[
                "I hear that you're going through a difficult time. That takes courage to share.",
                "Thank you for trusting me with your feelings. Remember, tough times don't last forever.",
                "I'm here to listen. It's okay to not feel okay sometimes - you're not alone.",
                "I understand you're struggling right now. Please be gentle with yourself.",
            ],
        ),
        (
            ResponseCategory::VeryLow,
            &[
                "I'm concerned about how you're feeling. Please know that you matter and support is available.",
                "These feelings must be really hard to carry. Have you considered talking to someone you trust?",
                "I'm here for you during this difficult time. Professional support can also be very helpful.",
                "You're going through something really tough. Please don't hesitate to reach out for help.",
            ],
        ),
    ],
};

// Clauses of the composed variant.
const OPENING: &str = "Thank you for sharing your thoughts with me. ";
const NEGATIVE_CLAUSE: &str = "I can sense that you're going through a tough time. ";
const LOW_MOOD_CLAUSE: &str =
    "It's completely okay to feel this way. Remember that difficult moments are temporary. ";
const POSITIVE_CLAUSE: &str = "It's wonderful to hear about your positive experience! ";
const HIGH_MOOD_CLAUSE: &str = "You seem to be in a really great place right now. ";
const NEUTRAL_CLAUSE: &str = "I appreciate you taking the time to share this with me. ";
const ANXIETY_CLAUSE: &str = "I notice you might be feeling some anxiety. Remember to take deep \
breaths and focus on the present moment. ";
const SADNESS_CLAUSE: &str =
    "It's okay to feel sad sometimes. These feelings are valid and important. ";
const CLOSING: &str = "Is there anything specific you'd like to talk more about?";

/// Context labels (lower-cased) and the clause each adds.
const CONTEXT_CLAUSES: &[(&[&str], &str)] = &[
    (
        &["work stress", "work"],
        "Work-related stress can be really challenging. Remember to take breaks and set boundaries when possible. ",
    ),
    (
        &["mental health", "depression", "anxiety"],
        "Your mental health is important. Consider reaching out to a professional if these feelings persist. ",
    ),
    (
        &["relationships", "family"],
        "Relationships can be complex. Open communication often helps resolve misunderstandings. ",
    ),
    (
        &["personal growth", "self-improvement"],
        "Personal growth is a journey, not a destination. Be patient with yourself. ",
    ),
];

/// Rule-based responder bound to one profile.
#[derive(Debug, Clone, Copy)]
pub struct RuleBasedResponder {
    profile: &'static ResponderProfile,
}

impl Default for RuleBasedResponder {
    fn default() -> Self {
        Self::new(&JOURNAL)
    }
}

impl RuleBasedResponder {
    pub fn new(profile: &'static ResponderProfile) -> Self {
        Self { profile }
    }

    pub fn from_name(name: ResponderProfileName) -> Self {
        Self::new(ResponderProfile::by_name(name))
    }

    pub fn profile(&self) -> &'static ResponderProfile {
        self.profile
    }

    /// Category for the inputs, crisis included.
    pub fn classify(&self, mood: Option<u8>, sentiment: f64) -> ResponseCategory {
        if self.profile.crisis_rule.triggers(mood, sentiment) {
            return ResponseCategory::Crisis;
        }
        let mood = mood.or(self.profile.default_mood);
        self.profile
            .tiers
            .iter()
            .find(|tier| tier.matches(mood, sentiment))
            .map_or(self.profile.otherwise, |tier| tier.category)
    }

    /// Pool variant: one message drawn uniformly from the category's pool.
    ///
    /// Emotions and context do not influence the pool variant.
    pub fn respond<R: Rng + ?Sized>(
        &self,
        input: &JournalInput,
        sentiment: f64,
        rng: &mut R,
    ) -> ResponseResult {
        let category = self.classify(input.mood, sentiment);
        let text = if category == ResponseCategory::Crisis {
            self.profile.crisis_message
        } else {
            self.profile
                .pool(category)
                .choose(rng)
                .copied()
                .unwrap_or(LAST_RESORT_MESSAGE)
        };
        rule_based(text.to_string(), sentiment, category)
    }

    /// Context-aware variant: the message is assembled from clauses.
    ///
    /// Mood clauses are skipped when no mood was reported. The crisis check
    /// runs first and short-circuits exactly like [`Self::respond`].
    pub fn compose(&self, input: &JournalInput, sentiment: f64) -> ResponseResult {
        let category = self.classify(input.mood, sentiment);
        if category == ResponseCategory::Crisis {
            return rule_based(self.profile.crisis_message.to_string(), sentiment, category);
        }

        let mut text = String::from(OPENING);
        if sentiment < -0.3 {
            text.push_str(NEGATIVE_CLAUSE);
            if input.mood.is_some_and(|m| m < 4) {
                text.push_str(LOW_MOOD_CLAUSE);
            }
        } else if sentiment > 0.3 {
            text.push_str(POSITIVE_CLAUSE);
            if input.mood.is_some_and(|m| m > 7) {
                text.push_str(HIGH_MOOD_CLAUSE);
            }
        } else {
            text.push_str(NEUTRAL_CLAUSE);
        }

        if let Some(context) = input.context.as_deref() {
            let context = context.trim().to_lowercase();
            if let Some((_, clause)) = CONTEXT_CLAUSES
                .iter()
                .find(|(labels, _)| labels.contains(&context.as_str()))
            {
                text.push_str(clause);
            }
        }

        let has_emotion = |name: &str| input.emotions.iter().any(|e| e == name);
        if has_emotion("anxiety") || has_emotion("stress") {
            text.push_str(ANXIETY_CLAUSE);
        }
        if has_emotion("sadness") {
            text.push_str(SADNESS_CLAUSE);
        }

        text.push_str(CLOSING);
        rule_based(text, sentiment, category)
    }
}

fn rule_based(text: String, sentiment: f64, category: ResponseCategory) -> ResponseResult {
    ResponseResult {
        text,
        sentiment_used: sentiment,
        category,
        source: ResponseSource::RuleBased,
    }
}
