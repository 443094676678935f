// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations.

use std::sync::Arc;

use moodline_config::MoodlineConfig;
use moodline_core::MoodlineError;
use moodline_core::types::JournalInput;
use moodline_gateway::{GatewayState, ServerConfig};
use moodline_pipeline::Pipeline;
use serde::Serialize;
use tracing::info;

pub async fn serve(config: &MoodlineConfig) -> Result<(), MoodlineError> {
    info!(name = %config.app.name, "starting moodline serve");
    let pipeline = Pipeline::from_config(config)?;
    let state = GatewayState::new(Arc::new(pipeline));
    moodline_gateway::start_server(&ServerConfig::from(&config.gateway), state).await
}

/// One text goes through the full sentiment path; several go through the batch path.
pub async fn analyze(config: &MoodlineConfig, texts: &[String]) -> Result<(), MoodlineError> {
    let pipeline = Pipeline::from_config(config)?;
    match texts {
        [text] => print_json(&pipeline.analyze(text).await),
        _ => print_json(&pipeline.analyze_batch(texts).await),
    }
}

pub async fn respond(
    config: &MoodlineConfig,
    text: String,
    mood: Option<u8>,
    emotions: Vec<String>,
    context: Option<String>,
) -> Result<(), MoodlineError> {
    let pipeline = Pipeline::from_config(config)?;
    let input = JournalInput {
        text,
        mood,
        emotions,
        context,
    };
    print_json(&pipeline.run(&input).await)
}

pub fn insights(config: &MoodlineConfig, text: &str) -> Result<(), MoodlineError> {
    let pipeline = Pipeline::from_config(config)?;
    print_json(&pipeline.insights(text))
}

pub async fn crisis(config: &MoodlineConfig) -> Result<(), MoodlineError> {
    let pipeline = Pipeline::from_config(config)?;
    print_json(&pipeline.crisis_support().await)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), MoodlineError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| MoodlineError::Internal(format!("failed to encode output: {e}")))?;
    println!("{out}");
    Ok(())
}
