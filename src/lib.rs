//! Scores the mood of a piece of text from three signals and answers with a
//! sass quote to match.

pub mod commands;
pub mod config;
pub mod engine;
pub mod llm;
pub mod postprocessing;
pub mod preprocessing;
pub mod repl;
pub mod sass;
pub mod sentiment;
pub mod session;

#[cfg(test)]
pub(crate) mod testkit;

pub use config::{Config, ConfigError};
pub use engine::{Orchestrator, Turn};
pub use llm::{ChatBackend, OpenAiClient};
pub use repl::Repl;
pub use sass::{SassQuoteGenerator, SassQuoteResult};
pub use sentiment::{AnalysisResult, MoodCategory, SentimentAnalyzer};
