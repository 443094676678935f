// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the AI endpoints.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use moodline_core::HealthStatus;
use moodline_core::types::{JournalInput, ResponseCategory, ResponseSource, SentimentResult};
use serde::{Deserialize, Serialize};

use crate::server::GatewayState;

const CONTEXT_FALLBACK: &str = "general";

/// Uniform response body.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    fn ok(message: &str, data: T) -> Response {
        Json(Envelope {
            success: true,
            message: message.to_string(),
            data: Some(data),
        })
        .into_response()
    }
}

fn bad_request(message: impl Into<String>) -> Response {
    let body: Envelope<()> = Envelope {
        success: false,
        message: message.into(),
        data: None,
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// Request body for POST /v1/ai/sentiment.
#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Request body for POST /v1/ai/response. `content` is accepted in place of `text`.
#[derive(Debug, Deserialize)]
pub struct ResponseRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub mood: Option<i64>,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub context: Option<String>,
}

impl ResponseRequest {
    fn into_input(self) -> Result<JournalInput, &'static str> {
        let text = [self.text, self.content]
            .into_iter()
            .flatten()
            .find(|t| !t.trim().is_empty())
            .ok_or("Text or content is required and must be a string")?;

        let mood = match self.mood {
            None => None,
            Some(m @ 1..=10) => Some(m as u8),
            Some(_) => return Err("Mood must be an integer between 1 and 10"),
        };

        Ok(JournalInput {
            text,
            mood,
            emotions: self.emotions,
            context: self.context,
        })
    }
}

/// Data payload of POST /v1/ai/response.
#[derive(Debug, Serialize)]
pub struct ResponseData {
    pub response: String,
    pub sentiment: SentimentResult,
    pub mood: Option<u8>,
    pub context: String,
    pub category: ResponseCategory,
    pub source: ResponseSource,
}

/// One provider's health as reported by GET /health.
#[derive(Debug, Serialize)]
pub struct ProviderStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl From<HealthStatus> for ProviderStatus {
    fn from(health: HealthStatus) -> Self {
        match health {
            HealthStatus::Healthy => Self {
                status: "healthy",
                detail: None,
            },
            HealthStatus::Degraded(reason) => Self {
                status: "degraded",
                detail: Some(reason),
            },
            HealthStatus::Unhealthy(reason) => Self {
                status: "unhealthy",
                detail: Some(reason),
            },
        }
    }
}

/// Data payload of GET /health.
#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
    pub generative: ProviderStatus,
    pub hosted: ProviderStatus,
}

/// POST /v1/ai/sentiment
pub async fn post_sentiment(
    State(state): State<GatewayState>,
    body: Result<Json<SentimentRequest>, JsonRejection>,
) -> Response {
    let text = match body {
        Ok(Json(SentimentRequest { text: Some(text) })) if !text.trim().is_empty() => text,
        Ok(_) => return bad_request("Text is required and must be a string"),
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let sentiment = state.pipeline.analyze(&text).await;
    Envelope::ok("Sentiment analysis completed", sentiment)
}

/// POST /v1/ai/insights
///
/// Local keyword analysis only; takes the same body as the sentiment route.
pub async fn post_insights(
    State(state): State<GatewayState>,
    body: Result<Json<SentimentRequest>, JsonRejection>,
) -> Response {
    let text = match body {
        Ok(Json(SentimentRequest { text: Some(text) })) if !text.trim().is_empty() => text,
        Ok(_) => return bad_request("Text is required and must be a string"),
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    Envelope::ok("Text insights extracted", state.pipeline.insights(&text))
}

/// POST /v1/ai/response
pub async fn post_response(
    State(state): State<GatewayState>,
    body: Result<Json<ResponseRequest>, JsonRejection>,
) -> Response {
    let input = match body {
        Ok(Json(request)) => match request.into_input() {
            Ok(input) => input,
            Err(message) => return bad_request(message),
        },
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let outcome = state.pipeline.run(&input).await;
    let data = ResponseData {
        response: outcome.response.text,
        sentiment: outcome.sentiment,
        mood: input.mood,
        context: input
            .context
            .unwrap_or_else(|| CONTEXT_FALLBACK.to_string()),
        category: outcome.response.category,
        source: outcome.response.source,
    };
    Envelope::ok("Response generated successfully", data)
}

/// GET /v1/ai/crisis-support
pub async fn get_crisis_support(State(state): State<GatewayState>) -> Response {
    let support = state.pipeline.crisis_support().await;
    Envelope::ok("Crisis support resources retrieved", support)
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Response {
    let health = state.pipeline.health().await;
    let data = HealthData {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.start_time.elapsed().as_secs(),
        generative: health.generative.into(),
        hosted: health.hosted.into(),
    };
    Envelope::ok("Service is running", data)
}
