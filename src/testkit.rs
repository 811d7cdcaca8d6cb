//! Test doubles shared by the module test suites.

use crate::config::Config;
use crate::llm::{ChatBackend, LLMError, LLMRequest};
use rand_core::{impls, RngCore};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Fail,
}

/// A chat backend that answers by matching substrings of the prompt.
pub struct ScriptedBackend {
    rules: Vec<(String, Reply)>,
    otherwise: Reply,
    requests: Mutex<Vec<LLMRequest>>,
}

impl ScriptedBackend {
    pub fn replying(text: &str) -> Self {
        Self {
            rules: Vec::new(),
            otherwise: Reply::Text(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            rules: Vec::new(),
            otherwise: Reply::Fail,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn when(mut self, needle: &str, text: &str) -> Self {
        self.rules
            .push((needle.to_string(), Reply::Text(text.to_string())));
        self
    }

    pub fn when_failing(mut self, needle: &str) -> Self {
        self.rules.push((needle.to_string(), Reply::Fail));
        self
    }

    pub fn requests(&self) -> Vec<LLMRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl ChatBackend for ScriptedBackend {
    async fn complete(&self, request: &LLMRequest) -> Result<String, LLMError> {
        self.requests.lock().unwrap().push(request.clone());

        let prompt = request.user_prompt();
        let reply = self
            .rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, reply)| reply)
            .unwrap_or(&self.otherwise);

        match reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail => Err(LLMError::Connection),
        }
    }
}

/// Deterministic random source cycling through fixed values.
pub struct SequenceRng {
    values: Vec<u32>,
    position: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        Self {
            values,
            position: 0,
        }
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        api_key: "test-key".to_string(),
        ..Config::default()
    }
}
