//! Definition enrichment via an OpenAI-compatible chat-completions API.
//!
//! One request per user action, no retries: a failed call surfaces once
//! and the add-word operation is abandoned with prior state unchanged.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use journal_core::{parse_reply, ParseError, WordDetails};

use crate::error::ApiError;

const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_endpoint: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("definition service not configured: {0}")]
    NotConfigured(&'static str),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("reply parse failed: {0}")]
    Reply(#[from] ParseError),
    #[error("empty response")]
    EmptyChoices,
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::NotConfigured(what) => {
                ApiError::BadRequest(format!("definition service not configured: {}", what))
            }
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

/// Client for the definition endpoint. Cheap to clone; holds a pooled
/// reqwest client.
#[derive(Clone)]
pub struct LlmClient {
    config: LlmConfig,
    client: reqwest::Client,
}

impl LlmClient {
    /// Build from environment: LLM_API_KEY, LLM_MODEL, LLM_API_ENDPOINT,
    /// LLM_TIMEOUT_MS.
    pub fn from_env() -> Self {
        let api_key = env_string("LLM_API_KEY");
        let model = env_string("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_endpoint = env_string("LLM_API_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
        let timeout =
            Duration::from_millis(env_u64("LLM_TIMEOUT_MS").unwrap_or(DEFAULT_TIMEOUT_MS));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            config: LlmConfig {
                api_key,
                model,
                api_endpoint,
                timeout,
            },
            client,
        }
    }

    pub fn is_available(&self) -> bool {
        self.config
            .api_key
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
    }

    /// Fetch a definition and example sentences for a saying.
    pub async fn fetch_word_details(&self, text: &str) -> Result<WordDetails, LlmError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or(LlmError::NotConfigured("LLM_API_KEY"))?;

        let url = format!(
            "{}/chat/completions",
            self.config.api_endpoint.trim_end_matches('/')
        );
        let payload = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You are an expert English language teacher."
                },
                {
                    "role": "user",
                    "content": build_prompt(text)
                }
            ],
            "temperature": 0.3,
            "max_tokens": 250,
        });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::HttpStatus { status, body });
        }

        let response: ChatResponse = resp.json().await?;
        let content = response.first_content().ok_or(LlmError::EmptyChoices)?;

        Ok(parse_reply(content)?)
    }
}

/// Prompt asking for a definition plus two numbered example sentences in
/// the Definition:/Examples: shape the reply parser expects.
fn build_prompt(text: &str) -> String {
    format!(
        "Write a concise (max 40 words) English definition for \"{text}\", \
         but do NOT start with phrases like \"{text} means\" or \"The word {text} means\". \
         Just provide the direct definition. \
         Then give 2 example sentences using \"{text}\" in context. \
         Format your reply as:\n\
         Definition: ...\n\
         Examples:\n\
         1. ...\n\
         2. ..."
    )
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_u64(key: &str) -> Option<u64> {
    env_string(key)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_text_and_format_markers() {
        let prompt = build_prompt("give up");
        assert!(prompt.contains("\"give up\""));
        assert!(prompt.contains("Definition:"));
        assert!(prompt.contains("Examples:"));
    }

    #[test]
    fn test_not_configured_maps_to_bad_request() {
        let api_err: ApiError = LlmError::NotConfigured("LLM_API_KEY").into();
        assert!(matches!(api_err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_empty_choices_maps_to_upstream() {
        let api_err: ApiError = LlmError::EmptyChoices.into();
        assert!(matches!(api_err, ApiError::Upstream(_)));
    }

    #[test]
    fn test_first_content() {
        let response = ChatResponse {
            choices: vec![ChatChoice {
                message: ChatMessage {
                    role: "assistant".to_string(),
                    content: "Definition: x".to_string(),
                },
            }],
        };
        assert_eq!(response.first_content(), Some("Definition: x"));

        let empty = ChatResponse { choices: vec![] };
        assert_eq!(empty.first_content(), None);
    }
}
