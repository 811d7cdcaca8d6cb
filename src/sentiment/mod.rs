//! # Sentiment
//!
//! Three independent signals, one blend, five moods.
//!
//! ```text
//! cleaned text ─┬─ lexicon::LexiconAnalyzer ── polarity ─┐
//!               ├─ rules::RuleAnalyzer ─────── compound ─┼─ combiner::combine ─ mood::classify
//!               └─ llm::LlmScorer ──────────── score ────┘
//! ```

pub mod analyzer;
pub mod combiner;
pub mod lexicon;
pub mod mood;
pub mod rules;
pub mod signal;

pub use analyzer::{AnalysisResult, IndividualScores, SentimentAnalyzer};
pub use combiner::{combine, LEXICON_WEIGHT, LLM_WEIGHT, RULES_WEIGHT};
pub use lexicon::LexiconAnalyzer;
pub use mood::{classify, MoodBucket, MoodCategory, MoodThresholds, MOOD_BUCKETS};
pub use rules::RuleAnalyzer;
pub use signal::{LexiconScores, LlmScore, RuleScores, SignalOutcome, NEUTRAL_EMOTION};

mod tests;
