//! Plain-text renderings of analyses and quotes. No colors here; the REPL
//! decides how to paint them.

use crate::sass::SassQuoteResult;
use crate::sentiment::{AnalysisResult, MoodThresholds, SignalOutcome};

const FRAME: &str = "==================================================";
const RULE: &str = "----------------------------------------";

pub fn format_results(analysis: &AnalysisResult, quote: &SassQuoteResult) -> String {
    [
        FRAME.to_string(),
        "🤖 SASSBOT RESULTS".to_string(),
        FRAME.to_string(),
        format!("📝 Text: {}", analysis.text()),
        format!("📊 Sentiment: {}", analysis.summary()),
        format!("💬 Sass Quote: {}", quote.formatted_output),
        FRAME.to_string(),
    ]
    .join("\n")
}

pub fn format_sentiment_breakdown(analysis: &AnalysisResult) -> String {
    let scores = analysis.scores();
    let lexicon = scores.lexicon.value();
    let rules = scores.rules.value();
    let llm = scores.llm.value();

    [
        "📊 DETAILED SENTIMENT BREAKDOWN".to_string(),
        RULE.to_string(),
        format!(
            "🔤 Lexicon: {:.3} (subjectivity: {:.3}){}",
            lexicon.polarity,
            lexicon.subjectivity,
            defaulted_marker(&scores.lexicon)
        ),
        format!(
            "⚡ Rules: {:.3} (pos: {:.2}, neg: {:.2}){}",
            rules.compound,
            rules.pos,
            rules.neg,
            defaulted_marker(&scores.rules)
        ),
        format!(
            "🤖 LLM: {:.3} ({}){}",
            llm.score,
            llm.emotion,
            defaulted_marker(&scores.llm)
        ),
        format!("🎯 Combined: {:.3}", analysis.combined_score()),
        RULE.to_string(),
    ]
    .join("\n")
}

/// Five lines, 💀 first, with the ranges the thresholds actually produce.
pub fn emoji_sentiment_scale(thresholds: &MoodThresholds) -> String {
    thresholds
        .ranges()
        .iter()
        .map(|(mood, low, high)| {
            format!(
                "{} {} ({} to {})",
                mood.emoji(),
                mood.label(),
                bound(*low),
                bound(*high)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One decimal unless the threshold needs more.
fn bound(value: f64) -> String {
    let tenths = value * 10.0;
    if (tenths - tenths.round()).abs() < 1e-9 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn defaulted_marker<T>(outcome: &SignalOutcome<T>) -> String {
    match outcome.reason() {
        Some(reason) => format!(" [defaulted: {}]", reason),
        None => String::new(),
    }
}
