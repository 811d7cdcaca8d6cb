//! # Sentiment Analyzer
//!
//! Cleans the input, gathers the three signals one after another, blends
//! them and buckets the result.

use super::combiner::{combine, finalize};
use super::lexicon::LexiconAnalyzer;
use super::mood::{MoodBucket, MoodCategory, MoodThresholds};
use super::rules::RuleAnalyzer;
use super::signal::{LexiconScores, LlmScore, RuleScores, SignalOutcome};
use crate::config::Config;
use crate::llm::{ChatBackend, LlmScorer};
use crate::preprocessing::{Cleaner, CleanerError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// The three signal readings behind one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndividualScores {
    pub lexicon: SignalOutcome<LexiconScores>,
    pub rules: SignalOutcome<RuleScores>,
    pub llm: SignalOutcome<LlmScore>,
}

impl IndividualScores {
    pub fn combined(&self) -> f64 {
        combine(
            self.lexicon.value().polarity,
            self.rules.value().compound,
            self.llm.value().score,
        )
    }
}

/// One finished analysis. Built once, read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    text: String,
    cleaned_text: String,
    combined_score: f64,
    mood_category: MoodCategory,
    mood_emoji: &'static str,
    mood_vibe: &'static str,
    individual_scores: IndividualScores,
    analysis_summary: String,
    analyzed_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// The score is blended, clamped, rounded to 3 decimals and only then
    /// classified, so `mood()` always agrees with `combined_score()`.
    pub fn new(
        text: impl Into<String>,
        cleaned_text: impl Into<String>,
        scores: IndividualScores,
        thresholds: &MoodThresholds,
    ) -> Self {
        let combined_score = finalize(scores.combined());
        let mood_category = thresholds.classify(combined_score);
        let bucket = mood_category.bucket();

        Self {
            text: text.into(),
            cleaned_text: cleaned_text.into(),
            combined_score,
            mood_category,
            mood_emoji: bucket.emoji,
            mood_vibe: bucket.vibe,
            individual_scores: scores,
            analysis_summary: summary_line(bucket, combined_score),
            analyzed_at: Utc::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cleaned_text(&self) -> &str {
        &self.cleaned_text
    }

    pub fn combined_score(&self) -> f64 {
        self.combined_score
    }

    pub fn mood(&self) -> MoodCategory {
        self.mood_category
    }

    pub fn bucket(&self) -> &'static MoodBucket {
        self.mood_category.bucket()
    }

    pub fn emoji(&self) -> &'static str {
        self.mood_emoji
    }

    pub fn vibe(&self) -> &'static str {
        self.mood_vibe
    }

    pub fn scores(&self) -> &IndividualScores {
        &self.individual_scores
    }

    pub fn summary(&self) -> &str {
        &self.analysis_summary
    }

    pub fn analyzed_at(&self) -> DateTime<Utc> {
        self.analyzed_at
    }
}

/// `"🔥 On Fire (Score: 0.86)"`
pub fn summary_line(bucket: &MoodBucket, score: f64) -> String {
    format!("{} {} (Score: {:.2})", bucket.emoji, bucket.vibe, score)
}

pub struct SentimentAnalyzer {
    cleaner: Cleaner,
    lexicon: LexiconAnalyzer,
    rules: RuleAnalyzer,
    llm: LlmScorer,
    thresholds: MoodThresholds,
}

impl SentimentAnalyzer {
    pub fn new(config: &Config, backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            cleaner: Cleaner::new(config.input),
            lexicon: LexiconAnalyzer::new(),
            rules: RuleAnalyzer::new(),
            llm: LlmScorer::new(backend, config.model.clone(), config.generation.clone()),
            thresholds: config.thresholds,
        }
    }

    pub fn thresholds(&self) -> &MoodThresholds {
        &self.thresholds
    }

    /// Fails only on input the cleaner rejects; every signal failure is
    /// absorbed into a neutral reading.
    #[instrument(skip(self, text))]
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, CleanerError> {
        info!("Analyzing text: {}...", preview(text, 50));

        let cleaned = self.cleaner.validate(text)?;

        let lexicon = SignalOutcome::measured(self.lexicon.analyze(&cleaned));
        let rules = SignalOutcome::measured(self.rules.polarity_scores(&cleaned));
        let llm = self.llm.score(&cleaned).await;

        let result = AnalysisResult::new(
            text,
            cleaned,
            IndividualScores {
                lexicon,
                rules,
                llm,
            },
            &self.thresholds,
        );

        info!("Analysis complete: {}", result.summary());
        Ok(result)
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
