//! Canned quotes used whenever the model cannot (or should not) write one.

use crate::sentiment::MoodCategory;
use rand_core::{OsRng, RngCore};
use std::str::FromStr;

const VERY_POSITIVE: [&str; 3] = [
    "You're literally glowing right now ✨",
    "Main character energy is OFF THE CHARTS 🔥",
    "Someone's living their best life and I'm here for it 💫",
];

const POSITIVE: [&str; 3] = [
    "Look at you being all optimistic and stuff 😊",
    "Good vibes only, I see you 🌟",
    "Your energy is giving 'everything's gonna be fine' ✨",
];

const NEUTRAL: [&str; 3] = [
    "Giving off strong 'existing' vibes today 😐",
    "Ah, the classic 'I'm fine' energy. Iconic. 🤷",
    "Neutrality is a choice, and you chose... adequately 📱",
];

const NEGATIVE: [&str; 3] = [
    "Someone's having a whole mood today 😞",
    "Life really said 'let's test this one' huh? 💔",
    "Your vibe is giving 'Monday morning' energy 🌧️",
];

const VERY_NEGATIVE: [&str; 3] = [
    "Bestie, who hurt you? (We're gonna key their car) 💀",
    "You're serving 'main character tragic backstory' realness 🖤",
    "This energy is DARK dark. We Stan a dramatic queen 👑",
];

pub fn quotes_for(category: MoodCategory) -> &'static [&'static str] {
    match category {
        MoodCategory::VeryPositive => &VERY_POSITIVE,
        MoodCategory::Positive => &POSITIVE,
        MoodCategory::Neutral => &NEUTRAL,
        MoodCategory::Negative => &NEGATIVE,
        MoodCategory::VeryNegative => &VERY_NEGATIVE,
    }
}

/// Lookup by tag; anything unrecognized gets the neutral list.
pub fn quotes_for_tag(tag: &str) -> &'static [&'static str] {
    let category = MoodCategory::from_str(tag).unwrap_or(MoodCategory::Neutral);
    quotes_for(category)
}

/// Uniform choice over a mood's list, driven by an injected random source.
pub struct FallbackPicker {
    rng: Box<dyn RngCore + Send>,
}

impl Default for FallbackPicker {
    fn default() -> Self {
        Self::new(OsRng)
    }
}

impl FallbackPicker {
    pub fn new(rng: impl RngCore + Send + 'static) -> Self {
        Self { rng: Box::new(rng) }
    }

    pub fn pick(&mut self, category: MoodCategory) -> &'static str {
        let quotes = quotes_for(category);
        let index = self.rng.next_u32() as usize % quotes.len();
        quotes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::SequenceRng;

    #[test]
    fn every_mood_has_three_quotes() {
        for category in MoodCategory::ALL {
            let quotes = quotes_for(category);
            assert_eq!(quotes.len(), 3);
            assert!(quotes.iter().all(|q| !q.trim().is_empty()));
        }
    }

    #[test]
    fn unknown_tag_uses_neutral_list() {
        assert_eq!(quotes_for_tag("ecstatic"), quotes_for(MoodCategory::Neutral));
        assert_eq!(quotes_for_tag(""), quotes_for(MoodCategory::Neutral));
        assert_eq!(
            quotes_for_tag("very_negative"),
            quotes_for(MoodCategory::VeryNegative)
        );
    }

    #[test]
    fn picker_follows_the_random_source() {
        let mut picker = FallbackPicker::new(SequenceRng::new(vec![0, 1, 2, 3]));
        assert_eq!(picker.pick(MoodCategory::Positive), POSITIVE[0]);
        assert_eq!(picker.pick(MoodCategory::Positive), POSITIVE[1]);
        assert_eq!(picker.pick(MoodCategory::Positive), POSITIVE[2]);
        // wraps around the list
        assert_eq!(picker.pick(MoodCategory::Positive), POSITIVE[0]);
    }

    #[test]
    fn os_picker_stays_within_the_list() {
        let mut picker = FallbackPicker::default();
        for _ in 0..100 {
            let quote = picker.pick(MoodCategory::VeryNegative);
            assert!(VERY_NEGATIVE.contains(&quote));
        }
    }
}
