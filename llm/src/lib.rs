//! LLM gateway: the single outbound call to a hosted, OpenAI-compatible
//! chat-completion API. The gateway never surfaces an error to its caller;
//! every failure mode collapses into a fixed user-facing string so the HTTP
//! layer has nothing provider-specific to catch.

use async_trait::async_trait;
use jetfriend_core::ChatMessage;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

mod prompt;

pub use prompt::{build_prompt, PERSONA};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Returned verbatim when no API key is configured.
pub const UNAVAILABLE_MESSAGE: &str = "I'm sorry, but AI functionality is currently unavailable. \
     Please set your OPENAI_API_KEY environment variable to enable AI responses.";

/// Upstream error codes embedded in the apology are cut to this length.
const ERROR_CODE_CHARS: usize = 80;

#[derive(Debug, Error)]
enum LlmError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("response contained no choices")]
    Empty,
}

impl LlmError {
    /// Short code for the user-facing apology string.
    fn code(&self) -> String {
        let raw = match self {
            LlmError::Http(e) => e
                .status()
                .map(|s| s.as_u16().to_string())
                .unwrap_or_else(|| e.to_string()),
            LlmError::Api { status, .. } => status.to_string(),
            LlmError::Empty => "empty response".to_string(),
        };
        raw.chars().take(ERROR_CODE_CHARS).collect()
    }
}

fn apology(code: &str) -> String {
    format!(
        "I'm sorry, I'm having trouble connecting right now. \
         Please try again in a moment. Error: {code}"
    )
}

#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Run one completion. Always returns displayable text, never an error.
    async fn complete(&self, messages: &[ChatMessage], max_tokens: u32, temperature: f32)
        -> String;

    /// Whether a real model is behind this gateway (an API key is set).
    fn is_configured(&self) -> bool;
}

pub struct OpenAiChat {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl OpenAiChat {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    async fn try_complete(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
            max_tokens,
            temperature,
        };

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let completion: CompletionResponse = resp.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .ok_or(LlmError::Empty)
    }
}

#[async_trait]
impl ChatCompletion for OpenAiChat {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: f32,
    ) -> String {
        let Some(api_key) = &self.api_key else {
            warn!("chat completion requested but no API key is configured");
            return UNAVAILABLE_MESSAGE.to_string();
        };

        match self
            .try_complete(api_key, messages, max_tokens, temperature)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                error!("chat completion failed: {e}");
                apology(&e.code())
            }
        }
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_degrades_to_fixed_message() {
        let gateway = OpenAiChat::new(None, DEFAULT_BASE_URL, DEFAULT_MODEL);
        let reply = gateway
            .complete(&[ChatMessage::user("hello")], 100, 0.7)
            .await;
        assert_eq!(reply, UNAVAILABLE_MESSAGE);
        assert!(!gateway.is_configured());
    }

    #[test]
    fn apology_embeds_truncated_code() {
        let long_code = "x".repeat(500);
        let text = apology(&long_code.chars().take(ERROR_CODE_CHARS).collect::<String>());
        assert!(text.starts_with("I'm sorry, I'm having trouble connecting"));
        assert!(text.len() < 300);
    }

    #[test]
    fn request_serializes_to_openai_wire_shape() {
        let messages = vec![ChatMessage::system("persona"), ChatMessage::user("hi")];
        let request = CompletionRequest {
            model: DEFAULT_MODEL,
            messages: &messages,
            max_tokens: 2000,
            temperature: 0.7,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
    }
}
