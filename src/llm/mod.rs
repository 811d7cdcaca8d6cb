//! # Language-model plumbing
//!
//! - `client`: the `ChatBackend` seam and its OpenAI-compatible HTTP implementation
//! - `templates`: the scoring and sass-quote prompts
//! - `parser`: tolerant reader for `Score:` / `Emotion:` replies
//! - `scorer`: the LLM sentiment signal built from the three above
//!
//! ```text
//! text → templates::scoring_prompt → ChatBackend::complete → parser → SignalOutcome<LlmScore>
//! ```

pub mod client;
pub mod parser;
pub mod scorer;
pub mod templates;

pub use client::{ChatBackend, LLMError, LLMRequest, LLMResponse, Message, OpenAiClient};
pub use parser::parse_score_response;
pub use scorer::LlmScorer;
