//! Final polish of results before they reach the terminal.

pub mod formatter;

pub use formatter::{emoji_sentiment_scale, format_results, format_sentiment_breakdown};
