//! Line-oriented reader for `Score:` / `Emotion:` replies.

use crate::sentiment::{LlmScore, NEUTRAL_EMOTION};

/// Pulls the score and emotion out of a free-form reply. Lines that match
/// neither prefix are skipped; a missing or unreadable score stays 0.0 and a
/// missing emotion stays `"neutral"`. The score is clamped into [-1, 1].
pub fn parse_score_response(content: &str) -> LlmScore {
    let mut score = 0.0;
    let mut emotion = NEUTRAL_EMOTION.to_string();

    for line in content.lines().map(str::trim) {
        if let Some(value) = strip_prefix_ci(line, "score:") {
            if let Some(parsed) = parse_number(value) {
                score = parsed;
            }
        } else if let Some(value) = strip_prefix_ci(line, "emotion:") {
            let value = value.trim();
            if !value.is_empty() {
                emotion = value.to_string();
            }
        }
    }

    LlmScore {
        score: score.clamp(-1.0, 1.0),
        emotion,
        raw_response: content.to_string(),
    }
}

fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &line[prefix.len()..])
}

fn parse_number(value: &str) -> Option<f64> {
    let value = value
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim();
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
