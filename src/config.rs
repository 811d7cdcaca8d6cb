//! Runtime configuration.
//!
//! Built once at startup from defaults, an optional TOML file and the
//! environment (a `.env` file is honored), then handed to each component.

use crate::preprocessing::InputLimits;
use crate::sentiment::MoodThresholds;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_API_URL: &str = "SASSBOT_API_URL";
pub const ENV_MODEL: &str = "SASSBOT_MODEL";
pub const ENV_MAX_TOKENS: &str = "SASSBOT_MAX_TOKENS";
pub const ENV_TIMEOUT: &str = "SASSBOT_TIMEOUT_SECONDS";
pub const ENV_THRESHOLD_POSITIVE: &str = "SASSBOT_THRESHOLD_POSITIVE";
pub const ENV_THRESHOLD_NEGATIVE: &str = "SASSBOT_THRESHOLD_NEGATIVE";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY not found in environment variables")]
    MissingApiKey,
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
    #[error("Invalid mood thresholds: {0}")]
    Thresholds(String),
    #[error("Invalid input limits: min {min} > max {max}")]
    InputLimits { min: usize, max: usize },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    pub max_tokens: u32,
    /// Scoring wants consistent numbers.
    pub scoring_temperature: f32,
    pub quote_temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: 150,
            scoring_temperature: 0.3,
            quote_temperature: 0.8,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing)]
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    /// No timeout unless set.
    pub request_timeout_seconds: Option<u64>,
    /// When false, quotes always come from the fallback lists.
    pub use_llm_quotes: bool,
    pub generation: GenerationConfig,
    pub thresholds: MoodThresholds,
    pub input: InputLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout_seconds: None,
            use_llm_quotes: true,
            generation: GenerationConfig::default(),
            thresholds: MoodThresholds::default(),
            input: InputLimits::default(),
        }
    }
}

impl Config {
    /// Defaults, then the TOML file if given, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let base = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };

        let config = base.with_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        debug!(model = %config.model, api_url = %config.api_url, "Configuration loaded");
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Overlays values found through `lookup` (normally `std::env::var`).
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = key.trim().to_string();
        }
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(model) = lookup(ENV_MODEL) {
            self.model = model;
        }
        if let Some(value) = lookup(ENV_MAX_TOKENS) {
            self.generation.max_tokens = parse_value(ENV_MAX_TOKENS, &value)?;
        }
        if let Some(value) = lookup(ENV_TIMEOUT) {
            self.request_timeout_seconds = Some(parse_value(ENV_TIMEOUT, &value)?);
        }
        if let Some(value) = lookup(ENV_THRESHOLD_POSITIVE) {
            self.thresholds.positive = parse_value(ENV_THRESHOLD_POSITIVE, &value)?;
        }
        if let Some(value) = lookup(ENV_THRESHOLD_NEGATIVE) {
            self.thresholds.negative = parse_value(ENV_THRESHOLD_NEGATIVE, &value)?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        self.thresholds
            .validate()
            .map_err(ConfigError::Thresholds)?;
        if self.input.min_length > self.input.max_length {
            return Err(ConfigError::InputLimits {
                min: self.input.min_length,
                max: self.input.max_length,
            });
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.generation.max_tokens, 150);
        assert_eq!(config.generation.quote_temperature, 0.8);
        assert_eq!(config.thresholds.positive, 0.1);
        assert_eq!(config.thresholds.negative, -0.1);
        assert_eq!(config.input.max_length, 1000);
        assert!(config.request_timeout_seconds.is_none());
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let config = Config::default().with_env(env(&[])).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default()
            .with_env(env(&[
                ("OPENAI_API_KEY", " sk-test "),
                ("SASSBOT_MODEL", "gpt-4o-mini"),
                ("SASSBOT_THRESHOLD_POSITIVE", "0.2"),
                ("SASSBOT_THRESHOLD_NEGATIVE", "-0.25"),
                ("SASSBOT_TIMEOUT_SECONDS", "20"),
            ]))
            .unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.thresholds.positive, 0.2);
        assert_eq!(config.thresholds.negative, -0.25);
        assert_eq!(config.request_timeout_seconds, Some(20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_env_value() {
        let result = Config::default().with_env(env(&[("SASSBOT_MAX_TOKENS", "lots")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "SASSBOT_MAX_TOKENS"
        ));
    }

    #[test]
    fn test_toml_partial_file() {
        let config = Config::from_toml_str(
            r#"
            model = "local-model"
            use_llm_quotes = false

            [thresholds]
            positive = 0.15

            [input]
            max_length = 280
            "#,
        )
        .unwrap();
        assert_eq!(config.model, "local-model");
        assert!(!config.use_llm_quotes);
        assert_eq!(config.thresholds.positive, 0.15);
        assert_eq!(config.thresholds.very_positive, 0.5);
        assert_eq!(config.input.max_length, 280);
        assert_eq!(config.input.min_length, 1);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let config = Config {
            api_key: "k".into(),
            ..Config::default()
        }
        .with_env(env(&[("SASSBOT_THRESHOLD_POSITIVE", "0.7")]))
        .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Thresholds(_))));
    }

    #[test]
    fn test_toml_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::from_toml_file(&missing),
            Err(ConfigError::Io { .. })
        ));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "model = [").unwrap();
        assert!(matches!(
            Config::from_toml_file(&broken),
            Err(ConfigError::Parse(_))
        ));
    }
}
