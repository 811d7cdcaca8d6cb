use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CleanerError {
    #[error("Input is empty after cleaning")]
    EmptyInput,
    #[error("Input is too short: {0} < {1} characters")]
    TooShort(usize, usize),
    #[error("Input exceeds maximum length: {0} > {1} characters")]
    TooLong(usize, usize),
}

/// Accepted input length, in characters, measured on the trimmed raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 1000,
        }
    }
}

/// Rewrite rules, applied in order after whitespace has been collapsed.
const RULES: [(&str, &str); 5] = [
    (r"https?://\S+", ""),
    (r"[@#]([A-Za-z0-9_]+)", "$1"),
    (r"!{2,}", "!"),
    (r"\?{2,}", "?"),
    (r"\.{3,}", "..."),
];

pub struct Cleaner {
    limits: InputLimits,
    whitespace: Option<Regex>,
    rules: Vec<(Regex, &'static str)>,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(InputLimits::default())
    }
}

impl Cleaner {
    pub fn new(limits: InputLimits) -> Self {
        let rules = RULES
            .iter()
            .filter_map(|&(pattern, replacement)| {
                Regex::new(pattern).ok().map(|regex| (regex, replacement))
            })
            .collect();

        Self {
            limits,
            whitespace: Regex::new(r"\s+").ok(),
            rules,
        }
    }

    pub fn limits(&self) -> InputLimits {
        self.limits
    }

    /// Normalizes text for scoring: whitespace runs, URLs, `@`/`#` markers,
    /// and repeated `!`, `?` and `.` runs.
    pub fn clean(&self, input: &str) -> String {
        let mut text = self.collapse_whitespace(input);

        for (regex, replacement) in &self.rules {
            text = regex.replace_all(&text, *replacement).into_owned();
        }

        self.collapse_whitespace(&text)
    }

    /// Checks the length bounds on the raw input and returns the cleaned text.
    pub fn validate(&self, input: &str) -> Result<String, CleanerError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CleanerError::EmptyInput);
        }

        let length = trimmed.chars().count();
        if length < self.limits.min_length {
            return Err(CleanerError::TooShort(length, self.limits.min_length));
        }
        if length > self.limits.max_length {
            return Err(CleanerError::TooLong(length, self.limits.max_length));
        }

        let cleaned = self.clean(trimmed);
        if cleaned.is_empty() {
            return Err(CleanerError::EmptyInput);
        }

        Ok(cleaned)
    }

    fn collapse_whitespace(&self, input: &str) -> String {
        match &self.whitespace {
            Some(regex) => regex.replace_all(input.trim(), " ").into_owned(),
            None => input.split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }
}
