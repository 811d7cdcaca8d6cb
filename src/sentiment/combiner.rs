//! Fixed-weight blend of the three signals.

/// Weight of the lexicon polarity signal.
pub const LEXICON_WEIGHT: f64 = 0.3;
/// Weight of the rule-based compound signal.
pub const RULES_WEIGHT: f64 = 0.3;
/// Weight of the LLM signal.
pub const LLM_WEIGHT: f64 = 0.4;

/// `0.3 * lexicon + 0.3 * compound + 0.4 * llm`.
///
/// Only the LLM score is clamped before blending; the other two come from
/// analyzers that already stay in range. Non-finite inputs count as neutral,
/// so the result is always a finite value.
pub fn combine(lexicon: f64, compound: f64, llm: f64) -> f64 {
    LEXICON_WEIGHT * finite_or_neutral(lexicon)
        + RULES_WEIGHT * finite_or_neutral(compound)
        + LLM_WEIGHT * finite_or_neutral(llm).clamp(-1.0, 1.0)
}

/// The stored form of a combined score: clamped to [-1, 1], 3 decimals.
pub fn finalize(score: f64) -> f64 {
    round_to(score.clamp(-1.0, 1.0), 3)
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn finite_or_neutral(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
