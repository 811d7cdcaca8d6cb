//! High-level coordinator: input → analysis → sass quote → session.

use super::core::update_state;
use super::types::{EngineState, Turn};
use crate::config::Config;
use crate::llm::ChatBackend;
use crate::preprocessing::CleanerError;
use crate::sass::{SassQuoteGenerator, SassQuoteResult};
use crate::sentiment::{AnalysisResult, MoodThresholds, SentimentAnalyzer};
use crate::session::Session;
use std::sync::Arc;

pub struct Orchestrator {
    analyzer: SentimentAnalyzer,
    generator: SassQuoteGenerator,
    state: EngineState,
}

impl Orchestrator {
    pub fn new(config: &Config, backend: Arc<dyn ChatBackend>) -> Self {
        Self::from_parts(
            SentimentAnalyzer::new(config, backend.clone()),
            SassQuoteGenerator::new(config, backend),
        )
    }

    pub fn from_parts(analyzer: SentimentAnalyzer, generator: SassQuoteGenerator) -> Self {
        Self {
            analyzer,
            generator,
            state: EngineState::default(),
        }
    }

    /// Drive one turn: analyze, write one quote, remember both.
    pub async fn turn(&mut self, text: &str) -> Result<Turn, CleanerError> {
        let analysis = self.analyzer.analyze(text).await?;
        let quote = self
            .generator
            .generate_sass_quote(&analysis, self.generator.prefers_llm())
            .await;

        let turn = Turn { analysis, quote };
        update_state(&mut self.state, &turn);
        Ok(turn)
    }

    /// `count` quotes for an earlier analysis; not recorded in the session.
    pub async fn alternatives(
        &mut self,
        analysis: &AnalysisResult,
        count: usize,
    ) -> Vec<SassQuoteResult> {
        self.generator
            .generate_multiple_quotes(analysis, count)
            .await
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.state.last.as_ref()
    }

    pub fn session(&self) -> &Session {
        &self.state.session
    }

    pub fn thresholds(&self) -> &MoodThresholds {
        self.analyzer.thresholds()
    }
}
