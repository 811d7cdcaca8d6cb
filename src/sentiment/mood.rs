//! Mood buckets and the score → category classifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lower bound (inclusive) of the `very_positive` bucket.
pub const VERY_POSITIVE_THRESHOLD: f64 = 0.5;
/// Lower bound (inclusive) of the `positive` bucket.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Upper bound (inclusive) of the `negative` bucket.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;
/// Upper bound (inclusive) of the `very_negative` bucket.
pub const VERY_NEGATIVE_THRESHOLD: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodCategory {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

/// Display metadata attached to a mood category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodBucket {
    pub category: MoodCategory,
    pub emoji: &'static str,
    pub vibe: &'static str,
    pub intensity: f64,
}

/// Ordered from most negative to most positive.
pub const MOOD_BUCKETS: [MoodBucket; 5] = [
    MoodBucket {
        category: MoodCategory::VeryNegative,
        emoji: "💀",
        vibe: "Big Oof",
        intensity: -0.5,
    },
    MoodBucket {
        category: MoodCategory::Negative,
        emoji: "😞",
        vibe: "Down Bad",
        intensity: -0.25,
    },
    MoodBucket {
        category: MoodCategory::Neutral,
        emoji: "😐",
        vibe: "Meh Energy",
        intensity: 0.0,
    },
    MoodBucket {
        category: MoodCategory::Positive,
        emoji: "😊",
        vibe: "Good Vibes",
        intensity: 0.25,
    },
    MoodBucket {
        category: MoodCategory::VeryPositive,
        emoji: "🔥",
        vibe: "On Fire",
        intensity: 0.5,
    },
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown mood category: {0}")]
pub struct UnknownMood(pub String);

impl MoodCategory {
    pub const ALL: [MoodCategory; 5] = [
        MoodCategory::VeryPositive,
        MoodCategory::Positive,
        MoodCategory::Neutral,
        MoodCategory::Negative,
        MoodCategory::VeryNegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodCategory::VeryPositive => "very_positive",
            MoodCategory::Positive => "positive",
            MoodCategory::Neutral => "neutral",
            MoodCategory::Negative => "negative",
            MoodCategory::VeryNegative => "very_negative",
        }
    }

    pub fn bucket(&self) -> &'static MoodBucket {
        let index = match self {
            MoodCategory::VeryNegative => 0,
            MoodCategory::Negative => 1,
            MoodCategory::Neutral => 2,
            MoodCategory::Positive => 3,
            MoodCategory::VeryPositive => 4,
        };
        &MOOD_BUCKETS[index]
    }

    pub fn emoji(&self) -> &'static str {
        self.bucket().emoji
    }

    pub fn vibe(&self) -> &'static str {
        self.bucket().vibe
    }

    pub fn intensity(&self) -> f64 {
        self.bucket().intensity
    }

    /// How the mood reads in plain words, used when prompting for quotes.
    pub fn description(&self) -> &'static str {
        match self {
            MoodCategory::VeryPositive => "extremely happy, energetic, over-the-top positive",
            MoodCategory::Positive => "happy, upbeat, optimistic",
            MoodCategory::Neutral => "indifferent, meh, neither good nor bad",
            MoodCategory::Negative => "sad, disappointed, down",
            MoodCategory::VeryNegative => "very upset, angry, devastated",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodCategory::VeryPositive => "Very Positive",
            MoodCategory::Positive => "Positive",
            MoodCategory::Neutral => "Neutral",
            MoodCategory::Negative => "Negative",
            MoodCategory::VeryNegative => "Very Negative",
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, MoodCategory::Negative | MoodCategory::VeryNegative)
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodCategory {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "very_positive" => Ok(MoodCategory::VeryPositive),
            "positive" => Ok(MoodCategory::Positive),
            "neutral" => Ok(MoodCategory::Neutral),
            "negative" => Ok(MoodCategory::Negative),
            "very_negative" => Ok(MoodCategory::VeryNegative),
            other => Err(UnknownMood(other.to_string())),
        }
    }
}

/// Bucket boundaries. Scores landing exactly on a boundary go to the
/// non-neutral side: ±0.1 is positive/negative, ±0.5 is the extreme bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodThresholds {
    pub very_positive: f64,
    pub positive: f64,
    pub negative: f64,
    pub very_negative: f64,
}

impl Default for MoodThresholds {
    fn default() -> Self {
        Self {
            very_positive: VERY_POSITIVE_THRESHOLD,
            positive: POSITIVE_THRESHOLD,
            negative: NEGATIVE_THRESHOLD,
            very_negative: VERY_NEGATIVE_THRESHOLD,
        }
    }
}

impl MoodThresholds {
    pub fn validate(&self) -> Result<(), String> {
        let ordered = [
            self.very_negative,
            self.negative,
            self.positive,
            self.very_positive,
        ];
        if ordered.iter().any(|t| !t.is_finite() || t.abs() > 1.0) {
            return Err("thresholds must be finite values within [-1, 1]".to_string());
        }
        if !ordered.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(format!(
                "expected very_negative < negative < positive < very_positive, got {} < {} < {} < {}",
                self.very_negative, self.negative, self.positive, self.very_positive
            ));
        }
        Ok(())
    }

    /// Total over the reals: values are clamped to [-1, 1] first and NaN
    /// lands in `neutral`.
    pub fn classify(&self, score: f64) -> MoodCategory {
        let score = score.clamp(-1.0, 1.0);

        if score >= self.very_positive {
            MoodCategory::VeryPositive
        } else if score >= self.positive {
            MoodCategory::Positive
        } else if score <= self.very_negative {
            MoodCategory::VeryNegative
        } else if score <= self.negative {
            MoodCategory::Negative
        } else {
            MoodCategory::Neutral
        }
    }

    /// Human-readable range for each bucket, most negative first.
    pub fn ranges(&self) -> [(MoodCategory, f64, f64); 5] {
        [
            (MoodCategory::VeryNegative, -1.0, self.very_negative),
            (MoodCategory::Negative, self.very_negative, self.negative),
            (MoodCategory::Neutral, self.negative, self.positive),
            (MoodCategory::Positive, self.positive, self.very_positive),
            (MoodCategory::VeryPositive, self.very_positive, 1.0),
        ]
    }
}

/// Classifies with the default thresholds.
pub fn classify(score: f64) -> MoodCategory {
    MoodThresholds::default().classify(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_resolve_away_from_neutral() {
        assert_eq!(classify(0.5), MoodCategory::VeryPositive);
        assert_eq!(classify(0.1), MoodCategory::Positive);
        assert_eq!(classify(-0.1), MoodCategory::Negative);
        assert_eq!(classify(-0.5), MoodCategory::VeryNegative);
    }

    #[test]
    fn interior_points() {
        assert_eq!(classify(0.8), MoodCategory::VeryPositive);
        assert_eq!(classify(0.2), MoodCategory::Positive);
        assert_eq!(classify(0.0), MoodCategory::Neutral);
        assert_eq!(classify(0.099), MoodCategory::Neutral);
        assert_eq!(classify(-0.099), MoodCategory::Neutral);
        assert_eq!(classify(-0.2), MoodCategory::Negative);
        assert_eq!(classify(-0.8), MoodCategory::VeryNegative);
    }

    #[test]
    fn classify_is_total() {
        assert_eq!(classify(f64::INFINITY), MoodCategory::VeryPositive);
        assert_eq!(classify(f64::NEG_INFINITY), MoodCategory::VeryNegative);
        assert_eq!(classify(f64::NAN), MoodCategory::Neutral);
        assert_eq!(classify(42.0), MoodCategory::VeryPositive);
        assert_eq!(classify(-42.0), MoodCategory::VeryNegative);

        let mut s = -1.5;
        while s <= 1.5 {
            let mood = classify(s);
            if s >= 0.5 {
                assert_eq!(mood, MoodCategory::VeryPositive, "score {s}");
            }
            if s <= -0.5 {
                assert_eq!(mood, MoodCategory::VeryNegative, "score {s}");
            }
            s += 0.01;
        }
    }

    #[test]
    fn custom_thresholds_move_the_buckets() {
        let thresholds = MoodThresholds {
            positive: 0.2,
            negative: -0.2,
            ..MoodThresholds::default()
        };
        assert!(thresholds.validate().is_ok());
        assert_eq!(thresholds.classify(0.15), MoodCategory::Neutral);
        assert_eq!(thresholds.classify(0.2), MoodCategory::Positive);
        assert_eq!(thresholds.classify(-0.2), MoodCategory::Negative);
    }

    #[test]
    fn unordered_thresholds_are_rejected() {
        let thresholds = MoodThresholds {
            positive: 0.6,
            ..MoodThresholds::default()
        };
        assert!(thresholds.validate().is_err());

        let thresholds = MoodThresholds {
            very_negative: f64::NAN,
            ..MoodThresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn bucket_table_matches_categories() {
        for category in MoodCategory::ALL {
            assert_eq!(category.bucket().category, category);
            assert_eq!(category.as_str().parse::<MoodCategory>(), Ok(category));
        }
        assert_eq!(MoodCategory::VeryPositive.emoji(), "🔥");
        assert_eq!(MoodCategory::VeryPositive.vibe(), "On Fire");
        assert_eq!(MoodCategory::Neutral.emoji(), "😐");
        assert_eq!(MoodCategory::VeryNegative.intensity(), -0.5);
        assert!("grumpy".parse::<MoodCategory>().is_err());
    }

    #[test]
    fn serializes_as_snake_case_tag() {
        let json = serde_json::to_string(&MoodCategory::VeryNegative).unwrap();
        assert_eq!(json, "\"very_negative\"");
    }
}
