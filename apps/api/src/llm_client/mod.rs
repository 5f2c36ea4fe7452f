/// LLM Client — the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion provider directly.
/// Handlers depend on the `ChatCompletion` trait carried in `AppState`.
///
/// The provider speaks the OpenAI-compatible `/chat/completions` contract.
/// No retries: a failed call surfaces to the caller unmodified.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::config::LlmSettings;

#[cfg(test)]
pub mod mock;

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport failure, timeout, or non-2xx status. `status` is `None` when
    /// no HTTP response was received.
    #[error("upstream request failed (status {status:?}): {body}")]
    Upstream { status: Option<u16>, body: String },

    #[error("malformed completion response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One role-tagged entry in a completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Per-call overrides. `None` falls back to the client's configured defaults.
#[derive(Debug, Clone, Default)]
pub struct CompletionOptions {
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

/// Seam between handlers and the completion provider.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Sends `messages` in order and returns the first choice's text verbatim.
    async fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// HTTP client for the completion provider.
/// Cloning shares the connection pool and the concurrency gate.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    temperature: f32,
    gate: Arc<Semaphore>,
}

impl LlmClient {
    pub fn new(settings: &LlmSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self::with_http_client(client, settings))
    }

    fn with_http_client(client: Client, settings: &LlmSettings) -> Self {
        Self {
            client,
            api_key: settings.api_key.clone(),
            api_url: settings.api_url.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            gate: Arc::new(Semaphore::new(settings.max_concurrency)),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: options.model.as_deref().unwrap_or(&self.model),
            messages,
            temperature: options.temperature.unwrap_or(self.temperature),
        };

        // Held until the response body has been read.
        let _permit = self.gate.acquire().await.map_err(|_| LlmError::Upstream {
            status: None,
            body: "completion gate closed".to_string(),
        })?;

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                warn!("LLM request failed: {e}");
                LlmError::Upstream {
                    status: e.status().map(|s| s.as_u16()),
                    body: e.to_string(),
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| LlmError::Upstream {
            status: Some(status.as_u16()),
            body: e.to_string(),
        })?;

        if !status.is_success() {
            warn!("LLM API returned {}: {}", status, body);
            return Err(LlmError::Upstream {
                status: Some(status.as_u16()),
                body,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::Malformed(e.to_string()))?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Malformed("response contained no choices".to_string()))?
            .message
            .content
            .ok_or_else(|| LlmError::Malformed("first choice has no content".to_string()))
    }
}
