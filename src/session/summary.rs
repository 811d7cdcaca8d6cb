//! Aggregate statistics over a set of analyses.

use super::batch::BatchEntry;
use crate::sentiment::combiner::round_to;
use crate::sentiment::{AnalysisResult, MoodCategory};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodSummary {
    pub total_texts: usize,
    pub valid_analyses: usize,
    pub average_score: f64,
    pub mood_distribution: BTreeMap<MoodCategory, usize>,
    pub dominant_mood: MoodCategory,
}

impl MoodSummary {
    /// Failed entries count toward `total_texts` only.
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        let mut summary = Self::from_analyses(entries.iter().filter_map(BatchEntry::sentiment));
        summary.total_texts = entries.len();
        summary
    }

    /// The dominant mood is the most frequent one; ties go to whichever
    /// appeared first. No analyses at all reads as neutral.
    pub fn from_analyses<'a>(analyses: impl IntoIterator<Item = &'a AnalysisResult>) -> Self {
        let mut mood_distribution: BTreeMap<MoodCategory, usize> =
            MoodCategory::ALL.iter().map(|&mood| (mood, 0)).collect();
        let mut first_seen: Vec<MoodCategory> = Vec::new();
        let mut total_score = 0.0;
        let mut valid_analyses = 0;

        for analysis in analyses {
            let mood = analysis.mood();
            *mood_distribution.entry(mood).or_insert(0) += 1;
            if !first_seen.contains(&mood) {
                first_seen.push(mood);
            }
            total_score += analysis.combined_score();
            valid_analyses += 1;
        }

        let average_score = if valid_analyses > 0 {
            round_to(total_score / valid_analyses as f64, 3)
        } else {
            0.0
        };

        let mut dominant_mood = MoodCategory::Neutral;
        let mut best = 0;
        for mood in first_seen {
            let count = mood_distribution.get(&mood).copied().unwrap_or(0);
            if count > best {
                best = count;
                dominant_mood = mood;
            }
        }

        Self {
            total_texts: valid_analyses,
            valid_analyses,
            average_score,
            mood_distribution,
            dominant_mood,
        }
    }

    pub fn count(&self, mood: MoodCategory) -> usize {
        self.mood_distribution.get(&mood).copied().unwrap_or(0)
    }
}
