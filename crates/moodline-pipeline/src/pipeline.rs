// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pipeline entry point: generative first, rule-based on any failure.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use moodline_config::MoodlineConfig;
use moodline_core::error::MoodlineError;
use moodline_core::types::{
    HealthStatus, JournalInput, ResponseCategory, ResponseResult, ResponseSource,
    SentimentResult,
};
use moodline_generative::GenerativeAnalyst;
use moodline_hosted::HostedClassifier;
use moodline_lexicon::{LexiconAnalyzer, detect_crisis_phrases, detect_emotions, extract_keywords};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::crisis::{CrisisSupport, static_crisis_resources};
use crate::orchestrator::SentimentOrchestrator;
use crate::responder::RuleBasedResponder;

/// Sentiment plus the response it informed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutcome {
    pub sentiment: SentimentResult,
    pub response: ResponseResult,
}

/// Annotation attached to a stored journal entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryAnnotation {
    pub sentiment: SentimentResult,
    pub ai_response: ResponseResult,
}

/// Keyword-level reading of a text, computed locally and independent of any score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInsights {
    /// Fine-grained emotion -> number of matched keywords.
    pub emotions: BTreeMap<String, usize>,
    pub keywords: Vec<String>,
    pub crisis_phrases: Vec<String>,
}

/// Credential status of the two remote providers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderHealth {
    pub generative: HealthStatus,
    pub hosted: HealthStatus,
}

/// The sentiment and response pipeline. Every public operation is total.
pub struct Pipeline {
    generative: GenerativeAnalyst,
    orchestrator: SentimentOrchestrator,
    responder: RuleBasedResponder,
    rng: Mutex<StdRng>,
}

impl Pipeline {
    /// Wires providers from configuration.
    ///
    /// Fails only when an HTTP client cannot be constructed.
    pub fn from_config(config: &MoodlineConfig) -> Result<Self, MoodlineError> {
        let generative = GenerativeAnalyst::from_config(&config.generative)?;
        let hosted = HostedClassifier::from_config(&config.hosted)?;
        let analyzer = LexiconAnalyzer::from_config(&config.lexicon);
        let orchestrator = SentimentOrchestrator::new(Arc::new(hosted), Arc::new(analyzer));
        let responder = RuleBasedResponder::from_name(config.responder.profile);

        info!(
            profile = responder.profile().name,
            generative = generative.is_configured(),
            "pipeline ready"
        );
        Ok(Self::new(generative, orchestrator, responder, config.responder.seed))
    }

    /// Assembles a pipeline from parts. `seed` of `None` draws from OS entropy.
    pub fn new(
        generative: GenerativeAnalyst,
        orchestrator: SentimentOrchestrator,
        responder: RuleBasedResponder,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            generative,
            orchestrator,
            responder,
            rng: Mutex::new(rng),
        }
    }

    pub fn orchestrator(&self) -> &SentimentOrchestrator {
        &self.orchestrator
    }

    pub fn responder(&self) -> &RuleBasedResponder {
        &self.responder
    }

    /// Sentiment and supportive response for one journal input.
    ///
    /// Generative sentiment and response are attempted together; if either
    /// fails the orchestrator and the context-aware rule-based responder
    /// take over.
    pub async fn run(&self, input: &JournalInput) -> PipelineOutcome {
        match self.run_generative(input).await {
            Ok(outcome) => {
                info!("using generative provider for response generation");
                outcome
            }
            Err(e) => {
                log_fallback(&e, "response generation");
                let sentiment = self.orchestrator.analyze(&input.text).await;
                let response = self.responder.compose(input, sentiment.score);
                PipelineOutcome {
                    sentiment,
                    response,
                }
            }
        }
    }

    async fn run_generative(&self, input: &JournalInput) -> Result<PipelineOutcome, MoodlineError> {
        let sentiment = self.generative.analyze_sentiment(&input.text).await?;
        let text = self.generative.generate_response(input).await?;
        let response = ResponseResult {
            text,
            sentiment_used: sentiment.score,
            category: ResponseCategory::NotApplicable,
            source: ResponseSource::Generative,
        };
        Ok(PipelineOutcome {
            sentiment,
            response,
        })
    }

    /// Sentiment only: generative first, orchestrator on failure.
    pub async fn analyze(&self, text: &str) -> SentimentResult {
        match self.generative.analyze_sentiment(text).await {
            Ok(result) => {
                info!(text_len = text.len(), "using generative provider for sentiment");
                result
            }
            Err(e) => {
                log_fallback(&e, "sentiment analysis");
                self.orchestrator.analyze(text).await
            }
        }
    }

    /// Orchestrated sentiment for many texts, in input order.
    pub async fn analyze_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SentimentResult> {
        self.orchestrator.analyze_batch(texts).await
    }

    /// Crisis resources: generated if possible, the static list otherwise.
    pub async fn crisis_support(&self) -> CrisisSupport {
        match self.generative.crisis_resources().await {
            Ok(value) => CrisisSupport::Generated(value),
            Err(e) => {
                log_fallback(&e, "crisis support");
                CrisisSupport::Static(static_crisis_resources())
            }
        }
    }

    /// Sentiment and a pool-drawn response for a journal entry being saved.
    pub async fn annotate_entry(&self, content: &str, mood: Option<u8>) -> EntryAnnotation {
        let sentiment = self.orchestrator.analyze(content).await;
        let input = JournalInput {
            mood,
            ..JournalInput::new(content)
        };
        let ai_response = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            self.responder.respond(&input, sentiment.score, &mut *rng)
        };
        debug!(category = %ai_response.category, "journal entry annotated");
        EntryAnnotation {
            sentiment,
            ai_response,
        }
    }

    /// Fine-grained emotions, keywords, and crisis phrases of `text`.
    pub fn insights(&self, text: &str) -> TextInsights {
        TextInsights {
            emotions: detect_emotions(text),
            keywords: extract_keywords(text),
            crisis_phrases: detect_crisis_phrases(text),
        }
    }

    pub async fn health(&self) -> ProviderHealth {
        ProviderHealth {
            generative: self.generative.health().await,
            hosted: self.orchestrator.hosted_health().await,
        }
    }
}

/// Missing credentials are expected and logged quietly.
fn log_fallback(err: &MoodlineError, operation: &str) {
    if err.is_unavailable() {
        debug!(operation, error = %err, "generative provider unavailable, using fallback");
    } else {
        warn!(operation, error = %err, "generative provider failed, using fallback");
    }
}
