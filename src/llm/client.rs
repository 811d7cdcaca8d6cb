use crate::config::Config;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
    #[error("Request timeout - the API took too long to respond")]
    Timeout,
    #[error("Connection error - unable to reach the API")]
    Connection,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Authentication failed - check your API key")]
    Unauthorized,
    #[error("Access forbidden - insufficient permissions")]
    Forbidden,
    #[error("Rate limit exceeded - too many requests")]
    RateLimited,
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Failed to parse API response as JSON: {0}")]
    InvalidResponse(String),
    #[error("API returned empty response")]
    EmptyChoices,
    #[error("API returned empty content")]
    EmptyContent,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LLMRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl LLMRequest {
    /// Single user-message request, the shape every prompt in this crate uses.
    pub fn prompt(model: &str, prompt: String, max_tokens: u32, temperature: f32) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![Message::user(prompt)],
            max_tokens: Some(max_tokens),
            temperature: Some(temperature),
        }
    }

    pub fn user_prompt(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
            .unwrap_or("")
    }
}

#[derive(Deserialize, Debug)]
pub struct LLMResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
pub struct Choice {
    pub message: Message,
}

/// Anything that can answer a chat-completion request with the text of the
/// first choice.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, request: &LLMRequest) -> Result<String, LLMError>;
}

/// OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self, LLMError> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| LLMError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait::async_trait]
impl ChatBackend for OpenAiClient {
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(&self, request: &LLMRequest) -> Result<String, LLMError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LLMError::Timeout
                } else if e.is_connect() {
                    LLMError::Connection
                } else {
                    LLMError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_error(status.as_u16(), body));
        }

        let llm_response: LLMResponse = response
            .json()
            .await
            .map_err(|e| LLMError::InvalidResponse(e.to_string()))?;

        let content = first_choice_content(llm_response)?;
        debug!(length = content.len(), "Chat completion received");
        Ok(content)
    }
}

fn status_error(status: u16, body: String) -> LLMError {
    match status {
        401 => LLMError::Unauthorized,
        403 => LLMError::Forbidden,
        429 => LLMError::RateLimited,
        500..=599 => LLMError::Server { status, body },
        _ => LLMError::Http { status, body },
    }
}

fn first_choice_content(response: LLMResponse) -> Result<String, LLMError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(LLMError::EmptyChoices)?;

    let content = choice.message.content.trim();
    if content.is_empty() {
        return Err(LLMError::EmptyContent);
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(status_error(401, String::new()), LLMError::Unauthorized));
        assert!(matches!(status_error(403, String::new()), LLMError::Forbidden));
        assert!(matches!(status_error(429, String::new()), LLMError::RateLimited));
        assert!(matches!(
            status_error(503, "down".into()),
            LLMError::Server { status: 503, .. }
        ));
        assert!(matches!(
            status_error(404, "nope".into()),
            LLMError::Http { status: 404, .. }
        ));
    }

    #[test]
    fn test_first_choice_extraction() {
        let response: LLMResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  Score: 0.4\nEmotion: calm \n"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            first_choice_content(response).unwrap(),
            "Score: 0.4\nEmotion: calm"
        );

        let empty: LLMResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(first_choice_content(empty), Err(LLMError::EmptyChoices)));

        let blank: LLMResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"   "}}]}"#,
        )
        .unwrap();
        assert!(matches!(first_choice_content(blank), Err(LLMError::EmptyContent)));
    }

    #[test]
    fn test_request_serialization() {
        let request = LLMRequest::prompt("gpt-3.5-turbo", "hi".to_string(), 150, 0.3);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 150);
        assert_eq!(request.user_prompt(), "hi");
    }
}
