// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    routing::{get, post},
};
use moodline_config::model::GatewayConfig;
use moodline_core::MoodlineError;
use moodline_pipeline::Pipeline;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub pipeline: Arc<Pipeline>,
    /// Process start time for uptime reporting.
    pub start_time: Instant,
}

impl GatewayState {
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            pipeline,
            start_time: Instant::now(),
        }
    }
}

/// Address the gateway binds to.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl From<&GatewayConfig> for ServerConfig {
    fn from(config: &GatewayConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
        }
    }
}

/// Builds the route table.
///
/// - POST /v1/ai/sentiment
/// - POST /v1/ai/response
/// - POST /v1/ai/insights
/// - GET /v1/ai/crisis-support
/// - GET /health
pub fn router(state: GatewayState) -> Router {
    let ai_routes = Router::new()
        .route("/v1/ai/sentiment", post(handlers::post_sentiment))
        .route("/v1/ai/response", post(handlers::post_response))
        .route("/v1/ai/insights", post(handlers::post_insights))
        .route("/v1/ai/crisis-support", get(handlers::get_crisis_support));

    Router::new()
        .route("/health", get(handlers::get_health))
        .merge(ai_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Binds `host:port` and serves until the listener fails.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), MoodlineError> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| MoodlineError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| MoodlineError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}
