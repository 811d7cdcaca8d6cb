//! Re-usable prompt skeletons.

use crate::sentiment::MoodCategory;

pub fn scoring_prompt(text: &str) -> String {
    format!(
        r#"Analyze the sentiment of this text on a scale from -1 to 1, where:
-1 = Very Negative
0 = Neutral
1 = Very Positive

Also provide a brief emotional context (1-3 words).

Text: "{text}"

Respond in this exact format:
Score: [number]
Emotion: [emotion words]"#
    )
}

pub fn sass_quote_prompt(category: MoodCategory, vibe: &str, score: f64) -> String {
    let energy_rule = if category.is_negative() {
        "- Match the energy level: this person is down, so do NOT be more upbeat than their mood"
    } else {
        "- Match the energy level (don't be too upbeat for negative moods)"
    };

    format!(
        r#"You're a sassy, witty friend giving quotes based on someone's mood.

Their current vibe: {vibe} ({description})
Sentiment score: {score} (where -1 is very negative, +1 is very positive)

Generate a SHORT (under 15 words), sassy, modern quote that matches their energy.

Style guidelines:
- Use Gen Z/millennial language
- Include 1-2 relevant emojis
- Be supportive but sassy
{energy_rule}

Examples for reference:
Very positive: "You're literally the main character today ✨🔥"
Positive: "Someone's radiating good energy and I'm here for it 🌟"
Neutral: "Giving off strong 'existing peacefully' vibes 😌"
Negative: "Life really tested you today, huh? 💔"
Very negative: "Bestie, we're surviving this together 💀🖤"

Generate ONE quote:"#,
        description = category.description(),
    )
}
