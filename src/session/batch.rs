//! Many texts in one go. A bad item becomes a `Failed` entry and the run
//! keeps going.

use crate::engine::Orchestrator;
use crate::sass::SassQuoteResult;
use crate::sentiment::AnalysisResult;
use serde::Serialize;
use tracing::{error, info};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    Analyzed {
        sentiment: AnalysisResult,
        sass_quote: SassQuoteResult,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    /// 1-based position in the input.
    pub index: usize,
    pub text: String,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

impl BatchEntry {
    pub fn sentiment(&self) -> Option<&AnalysisResult> {
        match &self.outcome {
            BatchOutcome::Analyzed { sentiment, .. } => Some(sentiment),
            BatchOutcome::Failed { .. } => None,
        }
    }

    pub fn sass_quote(&self) -> Option<&SassQuoteResult> {
        match &self.outcome {
            BatchOutcome::Analyzed { sass_quote, .. } => Some(sass_quote),
            BatchOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            BatchOutcome::Analyzed { .. } => None,
            BatchOutcome::Failed { error } => Some(error),
        }
    }
}

pub async fn batch_process<S: AsRef<str>>(
    orchestrator: &mut Orchestrator,
    texts: &[S],
) -> Vec<BatchEntry> {
    info!("Processing {} texts in batch", texts.len());

    let mut entries = Vec::with_capacity(texts.len());
    for (i, text) in texts.iter().enumerate() {
        let index = i + 1;
        let text = text.as_ref();
        info!("Processing text {}/{}", index, texts.len());

        let outcome = match orchestrator.turn(text).await {
            Ok(turn) => BatchOutcome::Analyzed {
                sentiment: turn.analysis,
                sass_quote: turn.quote,
            },
            Err(e) => {
                error!("Error processing text {}: {}", index, e);
                BatchOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };

        entries.push(BatchEntry {
            index,
            text: text.to_string(),
            outcome,
        });
    }
    entries
}
