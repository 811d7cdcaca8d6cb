use super::client::{ChatBackend, LLMRequest};
use super::parser::parse_score_response;
use super::templates::scoring_prompt;
use crate::config::GenerationConfig;
use crate::sentiment::{LlmScore, SignalOutcome};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// The model-backed sentiment signal. Never fails: a transport error turns
/// into a defaulted neutral reading.
pub struct LlmScorer {
    backend: Arc<dyn ChatBackend>,
    model: String,
    generation: GenerationConfig,
}

impl LlmScorer {
    pub fn new(backend: Arc<dyn ChatBackend>, model: impl Into<String>, generation: GenerationConfig) -> Self {
        Self {
            backend,
            model: model.into(),
            generation,
        }
    }

    #[instrument(skip(self, text), fields(length = text.len()))]
    pub async fn score(&self, text: &str) -> SignalOutcome<LlmScore> {
        let request = LLMRequest::prompt(
            &self.model,
            scoring_prompt(text),
            self.generation.max_tokens,
            self.generation.scoring_temperature,
        );

        match self.backend.complete(&request).await {
            Ok(content) => {
                let parsed = parse_score_response(&content);
                debug!(score = parsed.score, emotion = %parsed.emotion, "LLM score parsed");
                SignalOutcome::measured(parsed)
            }
            Err(e) => {
                warn!(error = %e, "LLM analysis failed, using neutral score");
                SignalOutcome::defaulted(e.to_string())
            }
        }
    }
}
