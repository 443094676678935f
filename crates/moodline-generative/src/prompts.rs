// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt templates for the three generative operations.

use moodline_core::types::JournalInput;

pub const SENTIMENT_SYSTEM_PROMPT: &str = "You are a sentiment analysis expert. You must respond \
with ONLY valid JSON in the exact format requested. Do not include any markdown formatting, code \
blocks, or additional text. Ensure all string values are properly quoted and all commas are \
correctly placed.";

pub const RESPONSE_SYSTEM_PROMPT: &str = "You are a compassionate mental health AI assistant. Be \
supportive, empathetic, and helpful.";

pub const CRISIS_SYSTEM_PROMPT: &str = "You are a crisis support specialist. Provide accurate, \
helpful crisis resources in JSON format. Do not wrap your response in markdown code blocks.";

/// Requests one JSON object describing the sentiment of `text`.
pub fn sentiment_prompt(text: &str) -> String {
    format!(
        r#"Analyze the sentiment of the following text and provide a detailed analysis.
Text: "{text}"

Please provide your analysis in the following JSON format:
{{
    "score": <sentiment_score_between_-1_and_1>,
    "source": "generative",
    "features": {{
        "wordCount": <number_of_words>,
        "emotions": {{
            "positive": <count_of_positive_words>,
            "negative": <count_of_negative_words>,
            "anxiety": <anxiety_level_0_to_1>
        }},
        "themes": [<list_of_detected_themes>],
        "urgency": <urgency_level_0_to_1>
    }},
    "analysis": "<detailed_analysis_in_plain_text>"
}}"#
    )
}

/// Requests a short empathetic reply to a journal entry.
pub fn response_prompt(input: &JournalInput) -> String {
    let mood = input
        .mood
        .map_or_else(|| "not provided".to_string(), |m| format!("{m}/10"));
    let emotions = input.emotions.join(", ");
    let context = input.context.as_deref().unwrap_or_default();

    format!(
        r#"You are a compassionate AI assistant helping someone with their mental health journal.

Journal Entry: "{text}"
User's Mood: {mood}
Emotions: {emotions}
Context: {context}

Please provide a supportive, empathetic response that:
1. Acknowledges their feelings
2. Offers gentle support and encouragement
3. Suggests helpful coping strategies if appropriate
4. Maintains a warm, caring tone
5. Is 2-3 sentences long

Response:"#,
        text = input.text,
    )
}

/// Requests emergency, international, and online crisis resources as JSON.
pub const CRISIS_PROMPT: &str = r#"Provide comprehensive crisis support information including:
1. Emergency hotlines (US and international)
2. Crisis text lines
3. Online resources
4. A supportive message

Please format the response as JSON with the following structure:
{
    "resources": {
        "emergency": {
            "national_suicide_prevention": {
                "number": "988",
                "description": "National Suicide Prevention Lifeline (US)"
            },
            "crisis_text_line": {
                "number": "741741",
                "description": "Text HOME to 741741"
            }
        },
        "international": {
            "befrienders_worldwide": {
                "website": "https://www.befrienders.org",
                "description": "Find crisis support in your country"
            }
        },
        "online_resources": {
            "mental_health_america": {
                "website": "https://www.mhanational.org",
                "description": "Mental Health America resources"
            }
        }
    },
    "message": "You are not alone. Help is available 24/7. Please reach out if you're having thoughts of harming yourself."
}"#;
