//! Signal readings and the value each analyzer falls back to.

use serde::{Deserialize, Serialize};

/// Either a real reading from an analyzer or the neutral stand-in used when
/// the analyzer could not produce one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SignalOutcome<T> {
    Measured { value: T },
    Defaulted { value: T, reason: String },
}

impl<T> SignalOutcome<T> {
    pub fn measured(value: T) -> Self {
        SignalOutcome::Measured { value }
    }

    pub fn value(&self) -> &T {
        match self {
            SignalOutcome::Measured { value } | SignalOutcome::Defaulted { value, .. } => value,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, SignalOutcome::Defaulted { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            SignalOutcome::Measured { .. } => None,
            SignalOutcome::Defaulted { reason, .. } => Some(reason),
        }
    }
}

impl<T: Default> SignalOutcome<T> {
    pub fn defaulted(reason: impl Into<String>) -> Self {
        SignalOutcome::Defaulted {
            value: T::default(),
            reason: reason.into(),
        }
    }
}

/// Lexicon analyzer output.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LexiconScores {
    /// -1 to 1
    pub polarity: f64,
    /// 0 to 1
    pub subjectivity: f64,
}

/// Rule-based analyzer output. The three proportions sum to roughly 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    /// -1 to 1
    pub compound: f64,
}

impl Default for RuleScores {
    fn default() -> Self {
        Self {
            neg: 0.0,
            neu: 1.0,
            pos: 0.0,
            compound: 0.0,
        }
    }
}

pub const NEUTRAL_EMOTION: &str = "neutral";

/// LLM analyzer output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmScore {
    /// -1 to 1
    pub score: f64,
    pub emotion: String,
    pub raw_response: String,
}

impl Default for LlmScore {
    fn default() -> Self {
        Self {
            score: 0.0,
            emotion: NEUTRAL_EMOTION.to_string(),
            raw_response: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaulted_outcomes_carry_neutral_values() {
        let llm: SignalOutcome<LlmScore> = SignalOutcome::defaulted("timeout");
        assert!(llm.is_defaulted());
        assert_eq!(llm.value().score, 0.0);
        assert_eq!(llm.value().emotion, "neutral");
        assert_eq!(llm.reason(), Some("timeout"));

        let rules: SignalOutcome<RuleScores> = SignalOutcome::defaulted("no tokens");
        assert_eq!(rules.value().neu, 1.0);
        assert_eq!(rules.value().compound, 0.0);
    }

    #[test]
    fn serialized_outcome_is_tagged() {
        let outcome = SignalOutcome::measured(LexiconScores {
            polarity: 0.5,
            subjectivity: 0.25,
        });
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "measured");
        assert_eq!(json["value"]["polarity"], 0.5);
        assert!(outcome.reason().is_none());
    }
}
