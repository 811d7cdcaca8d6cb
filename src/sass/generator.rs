//! # Sass Quote Generator
//!
//! Asks the model for a short quote matching the mood and falls back to the
//! canned lists when the call fails or comes back empty.

use super::fallback::FallbackPicker;
use crate::config::{Config, GenerationConfig};
use crate::llm::templates::sass_quote_prompt;
use crate::llm::{ChatBackend, LLMRequest};
use crate::sentiment::{AnalysisResult, MoodCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{info, instrument, warn};

const QUOTE_MARKS: [char; 6] = ['"', '\'', '“', '”', '‘', '’'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMethod {
    Llm,
    Fallback,
}

impl GenerationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMethod::Llm => "llm",
            GenerationMethod::Fallback => "fallback",
        }
    }
}

impl fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A quote plus the mood data it was written for. Values are copied out of
/// the analysis, nothing points back at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SassQuoteResult {
    pub sass_quote: String,
    pub mood_category: MoodCategory,
    pub mood_vibe: String,
    pub mood_emoji: String,
    pub sentiment_score: f64,
    pub generation_method: GenerationMethod,
    pub formatted_output: String,
}

impl SassQuoteResult {
    pub fn new(analysis: &AnalysisResult, quote: String, method: GenerationMethod) -> Self {
        Self {
            formatted_output: format!("{} {}", analysis.emoji(), quote),
            sass_quote: quote,
            mood_category: analysis.mood(),
            mood_vibe: analysis.vibe().to_string(),
            mood_emoji: analysis.emoji().to_string(),
            sentiment_score: analysis.combined_score(),
            generation_method: method,
        }
    }
}

pub struct SassQuoteGenerator {
    backend: Arc<dyn ChatBackend>,
    model: String,
    generation: GenerationConfig,
    prefer_llm: bool,
    picker: FallbackPicker,
}

impl SassQuoteGenerator {
    pub fn new(config: &Config, backend: Arc<dyn ChatBackend>) -> Self {
        Self::with_picker(config, backend, FallbackPicker::default())
    }

    pub fn with_picker(config: &Config, backend: Arc<dyn ChatBackend>, picker: FallbackPicker) -> Self {
        Self {
            backend,
            model: config.model.clone(),
            generation: config.generation.clone(),
            prefer_llm: config.use_llm_quotes,
            picker,
        }
    }

    pub fn prefers_llm(&self) -> bool {
        self.prefer_llm
    }

    /// Model first. The returned method says which path produced the quote.
    #[instrument(skip(self, vibe))]
    pub async fn generate(
        &mut self,
        category: MoodCategory,
        vibe: &str,
        score: f64,
    ) -> (String, GenerationMethod) {
        let request = LLMRequest::prompt(
            &self.model,
            sass_quote_prompt(category, vibe, score),
            self.generation.max_tokens,
            self.generation.quote_temperature,
        );

        match self.backend.complete(&request).await {
            Ok(content) => {
                let quote = strip_quote_marks(&content);
                if quote.is_empty() {
                    warn!("LLM returned an empty sass quote, using fallback");
                    return (self.fallback_quote(category), GenerationMethod::Fallback);
                }
                info!("Generated LLM sass quote: {}", quote);
                (quote, GenerationMethod::Llm)
            }
            Err(e) => {
                warn!(error = %e, "LLM sass quote generation failed, using fallback");
                (self.fallback_quote(category), GenerationMethod::Fallback)
            }
        }
    }

    pub fn fallback_quote(&mut self, category: MoodCategory) -> String {
        self.picker.pick(category).to_string()
    }

    pub async fn generate_sass_quote(
        &mut self,
        analysis: &AnalysisResult,
        use_llm: bool,
    ) -> SassQuoteResult {
        info!("Generating sass quote for {} mood", analysis.mood());

        let (quote, method) = if use_llm {
            self.generate(analysis.mood(), analysis.vibe(), analysis.combined_score())
                .await
        } else {
            (
                self.fallback_quote(analysis.mood()),
                GenerationMethod::Fallback,
            )
        };

        let result = SassQuoteResult::new(analysis, quote, method);
        info!("Sass quote generated: {}", result.formatted_output);
        result
    }

    /// One quote on the preferred path, then `count - 1` fallback quotes.
    pub async fn generate_multiple_quotes(
        &mut self,
        analysis: &AnalysisResult,
        count: usize,
    ) -> Vec<SassQuoteResult> {
        if count == 0 {
            return Vec::new();
        }

        let mut quotes = Vec::with_capacity(count);
        quotes.push(self.generate_sass_quote(analysis, self.prefer_llm).await);

        for _ in 1..count {
            let quote = self.fallback_quote(analysis.mood());
            quotes.push(SassQuoteResult::new(
                analysis,
                quote,
                GenerationMethod::Fallback,
            ));
        }
        quotes
    }
}

/// Drops whitespace and any straight or curly quotation marks the model
/// wrapped around its answer.
pub fn strip_quote_marks(raw: &str) -> String {
    raw.trim().trim_matches(&QUOTE_MARKS[..]).trim().to_string()
}
