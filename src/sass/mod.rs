//! Mood-matched one-liners: model-written when possible, canned otherwise.

pub mod fallback;
pub mod generator;

pub use fallback::{quotes_for, quotes_for_tag, FallbackPicker};
pub use generator::{strip_quote_marks, GenerationMethod, SassQuoteGenerator, SassQuoteResult};
