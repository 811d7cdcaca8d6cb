//! # Rule Analyzer
//!
//! Valence-rule scoring in the VADER manner. Each known word has a valence on
//! a -4..4 scale which is pushed around by the words before it (boosters,
//! dampeners, negations), by ALL-CAPS emphasis, and by a contrastive "but".
//! The summed valence plus punctuation emphasis is squashed into a compound
//! score in [-1, 1]; the pos/neu/neg proportions describe the word mix.

use super::combiner::round_to;
use super::signal::RuleScores;
use std::collections::{HashMap, HashSet};

const BOOSTER_INCREMENT: f64 = 0.293;
const BOOSTER_DECREMENT: f64 = -0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_QUESTION_BONUS: f64 = 0.96;
/// Smoothing constant of the compound normalization.
const NORMALIZATION_ALPHA: f64 = 15.0;

pub struct RuleAnalyzer {
    valence: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl Default for RuleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleAnalyzer {
    pub fn new() -> Self {
        let valence = HashMap::from([
            ("best", 3.2),
            ("good", 1.9),
            ("great", 3.1),
            ("amazing", 2.8),
            ("awesome", 3.1),
            ("love", 3.2),
            ("loved", 2.9),
            ("happy", 2.7),
            ("perfect", 2.7),
            ("perfectly", 3.2),
            ("excellent", 2.7),
            ("wonderful", 2.7),
            ("fantastic", 2.6),
            ("nice", 1.8),
            ("fine", 0.8),
            ("okay", 0.9),
            ("ok", 1.2),
            ("fun", 2.3),
            ("glad", 2.0),
            ("excited", 1.4),
            ("beautiful", 2.9),
            ("proud", 2.1),
            ("special", 1.7),
            ("lucky", 1.8),
            ("cool", 1.3),
            ("brilliant", 2.8),
            ("hope", 1.9),
            ("win", 2.8),
            ("yay", 2.4),
            ("thanks", 1.9),
            ("enjoy", 2.2),
            ("bad", -2.5),
            ("terrible", -2.1),
            ("awful", -2.0),
            ("horrible", -2.5),
            ("hate", -2.7),
            ("worst", -3.1),
            ("sad", -2.1),
            ("down", -1.0),
            ("wrong", -2.1),
            ("angry", -2.3),
            ("upset", -1.6),
            ("boring", -1.3),
            ("tired", -1.9),
            ("annoyed", -1.6),
            ("disappointed", -1.9),
            ("miserable", -2.2),
            ("stupid", -2.4),
            ("ugly", -2.3),
            ("lonely", -1.5),
            ("poor", -2.1),
            ("sick", -2.3),
            ("hurt", -2.4),
            ("cry", -2.1),
            ("fail", -2.5),
            ("pain", -2.3),
            ("worse", -2.1),
            ("problem", -1.7),
            ("lost", -1.3),
        ]);

        let mut boosters = HashMap::new();
        for word in [
            "absolutely", "amazingly", "completely", "deeply", "especially", "extremely",
            "incredibly", "really", "so", "super", "totally", "very", "utterly", "most", "more",
            "such",
        ] {
            boosters.insert(word, BOOSTER_INCREMENT);
        }
        for word in [
            "barely", "hardly", "slightly", "somewhat", "little", "less", "marginally",
            "occasionally", "partly", "scarcely",
        ] {
            boosters.insert(word, BOOSTER_DECREMENT);
        }

        let negations = HashSet::from([
            "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont", "hadnt",
            "hasnt", "havent", "isnt", "neither", "never", "none", "nope", "nor", "not",
            "nothing", "nowhere", "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt",
            "rarely", "seldom", "despite",
        ]);

        Self {
            valence,
            boosters,
            negations,
        }
    }

    pub fn get_valence(&self, word: &str) -> Option<f64> {
        self.valence.get(word.to_lowercase().as_str()).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        word.ends_with("n't") || self.negations.contains(word.as_str())
    }

    pub fn polarity_scores(&self, text: &str) -> RuleScores {
        let raw: Vec<&str> = text
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| ".,!?;:\"()[]".contains(c)))
            .filter(|w| !w.is_empty())
            .collect();

        if raw.is_empty() {
            return RuleScores::default();
        }

        let caps_count = raw.iter().filter(|w| is_all_caps(w)).count();
        let caps_differential = caps_count > 0 && caps_count < raw.len();
        let lower: Vec<String> = raw.iter().map(|w| w.to_lowercase()).collect();

        let mut sentiments: Vec<f64> = lower
            .iter()
            .enumerate()
            .map(|(i, word)| self.word_valence(i, word, &raw, &lower, caps_differential))
            .collect();

        if let Some(but) = lower.iter().position(|w| w == "but") {
            for (i, s) in sentiments.iter_mut().enumerate() {
                if i < but {
                    *s *= 0.5;
                } else if i > but {
                    *s *= 1.5;
                }
            }
        }

        self.score_valence(&sentiments, text)
    }

    fn word_valence(
        &self,
        i: usize,
        word: &str,
        raw: &[&str],
        lower: &[String],
        caps_differential: bool,
    ) -> f64 {
        if self.boosters.contains_key(word) {
            return 0.0;
        }
        let Some(mut valence) = self.valence.get(word).copied() else {
            return 0.0;
        };

        if caps_differential && is_all_caps(raw[i]) {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        let mut negated = false;
        for distance in 1..=3 {
            let Some(j) = i.checked_sub(distance) else {
                break;
            };
            if let Some(&boost) = self.boosters.get(lower[j].as_str()) {
                let mut scalar = if valence < 0.0 { -boost } else { boost };
                if caps_differential && is_all_caps(raw[j]) {
                    scalar += CAPS_INCREMENT.copysign(valence);
                }
                scalar *= match distance {
                    2 => 0.95,
                    3 => 0.9,
                    _ => 1.0,
                };
                valence += scalar;
            }
            if self.is_negation(&lower[j]) {
                negated = true;
            }
        }

        if negated {
            valence *= NEGATION_SCALAR;
        }
        valence
    }

    fn score_valence(&self, sentiments: &[f64], text: &str) -> RuleScores {
        let punctuation = punctuation_emphasis(text);

        let mut total: f64 = sentiments.iter().sum();
        if total > 0.0 {
            total += punctuation;
        } else if total < 0.0 {
            total -= punctuation;
        }
        let compound = (total / (total * total + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);

        let mut pos_sum: f64 = sentiments.iter().filter(|s| **s > 0.0).map(|s| s + 1.0).sum();
        let mut neg_sum: f64 = sentiments.iter().filter(|s| **s < 0.0).map(|s| s - 1.0).sum();
        let neu_count = sentiments.iter().filter(|s| **s == 0.0).count() as f64;

        if pos_sum > neg_sum.abs() {
            pos_sum += punctuation;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= punctuation;
        }

        let total_weight = pos_sum + neg_sum.abs() + neu_count;
        if total_weight == 0.0 {
            return RuleScores::default();
        }

        RuleScores {
            neg: round_to((neg_sum / total_weight).abs(), 3),
            neu: round_to((neu_count / total_weight).abs(), 3),
            pos: round_to((pos_sum / total_weight).abs(), 3),
            compound: round_to(compound, 4),
        }
    }
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
        && word.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_bonus = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => MAX_QUESTION_BONUS,
    };
    exclamations as f64 * EXCLAMATION_INCREMENT + question_bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_direction() {
        let rules = RuleAnalyzer::new();
        let pos = rules.polarity_scores("This is absolutely amazing!");
        let neg = rules.polarity_scores("This is terrible");
        assert!(pos.compound > 0.0);
        assert!(neg.compound < 0.0);
        assert!(pos.pos > 0.0 && neg.neg > 0.0);
    }

    #[test]
    fn test_known_compound_values() {
        let rules = RuleAnalyzer::new();
        // 3.2 + one exclamation (0.292) → 3.492 / sqrt(3.492² + 15)
        let scores = rules.polarity_scores("I'm having the best day ever!");
        assert!((scores.compound - 0.6696).abs() < 1e-9);
        assert_eq!(scores.neg, 0.0);

        let scores = rules.polarity_scores("Today was okay, nothing special happened.");
        assert!((scores.compound + 0.092).abs() < 1e-9);
    }

    #[test]
    fn test_empty_and_unknown_text() {
        let rules = RuleAnalyzer::new();
        assert_eq!(rules.polarity_scores(""), RuleScores::default());
        let scores = rules.polarity_scores("the meeting is at noon");
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.neu, 1.0);
    }

    #[test]
    fn test_negation_reverses_valence() {
        let rules = RuleAnalyzer::new();
        assert!(rules.polarity_scores("the movie was good").compound > 0.0);
        assert!(rules.polarity_scores("the movie was not good").compound < 0.0);
        assert!(rules.polarity_scores("the movie wasn't good").compound < 0.0);
    }

    #[test]
    fn test_boosters_and_caps_amplify() {
        let rules = RuleAnalyzer::new();
        let plain = rules.polarity_scores("the food is good").compound;
        let boosted = rules.polarity_scores("the food is very good").compound;
        let shouted = rules.polarity_scores("the food is GOOD").compound;
        let dampened = rules.polarity_scores("the food is slightly good").compound;
        assert!(boosted > plain);
        assert!(shouted > plain);
        assert!(dampened < plain);
    }

    #[test]
    fn test_but_shifts_weight_to_second_clause() {
        let rules = RuleAnalyzer::new();
        let scores = rules.polarity_scores("The food was good but the service was awful");
        assert!(scores.compound < 0.0);
    }

    #[test]
    fn test_exclamations_add_emphasis() {
        let rules = RuleAnalyzer::new();
        let calm = rules.polarity_scores("great day").compound;
        let loud = rules.polarity_scores("great day!!!").compound;
        assert!(loud > calm);
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let rules = RuleAnalyzer::new();
        let scores = rules.polarity_scores("I love sunny days but hate the heat");
        let sum = scores.pos + scores.neu + scores.neg;
        assert!((sum - 1.0).abs() < 0.01);
    }
}
