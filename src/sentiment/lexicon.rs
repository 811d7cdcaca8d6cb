//! # Lexicon Analyzer
//!
//! Pattern-style polarity: every opinion word found in the text contributes
//! its (polarity, subjectivity) pair, adjusted by a directly preceding
//! intensifier and by a negation in the three words before it. The text's
//! scores are the means of the contributions.

use super::signal::LexiconScores;
use std::collections::HashMap;

/// Factor applied to a negated word's polarity.
const NEGATION_FACTOR: f64 = -0.5;
/// How many words back a negation still applies.
const NEGATION_WINDOW: usize = 3;

pub struct LexiconAnalyzer {
    /// Word to (polarity, subjectivity)
    words: HashMap<&'static str, (f64, f64)>,
    negations: Vec<&'static str>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        let entries: [(&str, f64, f64); 46] = [
            // Positive
            ("best", 1.0, 0.3),
            ("good", 0.7, 0.6),
            ("great", 0.8, 0.75),
            ("amazing", 0.6, 0.9),
            ("awesome", 1.0, 1.0),
            ("love", 0.5, 0.6),
            ("loved", 0.7, 0.8),
            ("happy", 0.8, 1.0),
            ("perfect", 1.0, 1.0),
            ("perfectly", 1.0, 1.0),
            ("excellent", 1.0, 1.0),
            ("wonderful", 1.0, 1.0),
            ("fantastic", 0.4, 0.9),
            ("nice", 0.6, 1.0),
            ("fine", 0.4, 0.5),
            ("okay", 0.5, 0.5),
            ("ok", 0.5, 0.5),
            ("fun", 0.3, 0.2),
            ("glad", 0.5, 1.0),
            ("excited", 0.375, 0.75),
            ("beautiful", 0.85, 1.0),
            ("proud", 0.8, 1.0),
            ("special", 0.357, 0.571),
            ("lucky", 0.333, 1.0),
            ("cool", 0.35, 0.65),
            ("brilliant", 0.9, 1.0),
            // Negative
            ("bad", -0.7, 0.667),
            ("terrible", -1.0, 1.0),
            ("awful", -1.0, 1.0),
            ("horrible", -1.0, 1.0),
            ("hate", -0.8, 0.9),
            ("worst", -1.0, 1.0),
            ("sad", -0.5, 1.0),
            ("down", -0.156, 0.288),
            ("wrong", -0.5, 0.9),
            ("angry", -0.5, 1.0),
            ("upset", -0.5, 0.8),
            ("boring", -1.0, 1.0),
            ("tired", -0.4, 0.7),
            ("annoying", -0.8, 0.9),
            ("disappointed", -0.75, 0.75),
            ("miserable", -1.0, 1.0),
            ("stupid", -0.8, 1.0),
            ("ugly", -0.7, 1.0),
            ("lonely", -0.5, 1.0),
            ("sick", -0.714, 0.857),
        ];

        let words = entries
            .iter()
            .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
            .collect();

        let negations = vec![
            "not", "no", "never", "nothing", "none", "nobody", "neither", "nor", "without",
            "hardly", "cannot", "cant", "dont", "wont", "isnt", "didnt", "doesnt", "wasnt",
            "arent",
        ];

        let intensifiers = HashMap::from([
            ("very", 1.3),
            ("really", 1.2),
            ("extremely", 1.5),
            ("super", 1.3),
            ("so", 1.2),
            ("absolutely", 1.4),
            ("totally", 1.3),
            ("incredibly", 1.5),
            ("quite", 1.1),
        ]);

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    pub fn get_entry(&self, word: &str) -> Option<(f64, f64)> {
        self.words.get(word.to_lowercase().as_str()).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        word.ends_with("n't") || self.negations.iter().any(|n| *n == word)
    }

    pub fn get_intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word.to_lowercase().as_str()).copied()
    }

    pub fn analyze(&self, text: &str) -> LexiconScores {
        let tokens = tokenize(text);
        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some((mut polarity, mut subjectivity)) = self.get_entry(token) else {
                continue;
            };

            if let Some(multiplier) = i
                .checked_sub(1)
                .and_then(|prev| self.get_intensifier(&tokens[prev]))
            {
                polarity *= multiplier;
                subjectivity *= multiplier;
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| self.is_negation(t)) {
                polarity *= NEGATION_FACTOR;
            }

            polarities.push(polarity.clamp(-1.0, 1.0));
            subjectivities.push(subjectivity.clamp(0.0, 1.0));
        }

        LexiconScores {
            polarity: mean(&polarities),
            subjectivity: mean(&subjectivities),
        }
    }
}

/// Lowercase word tokens; apostrophes stay inside words ("can't").
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('\u{2019}', "'")
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|token| token.trim_matches('\''))
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
