use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Clone, Debug)]
pub struct OpenAiClientConfig {
    pub base_url: String,
    /// Bearer credential. `None` sends unauthenticated requests.
    pub api_key: Option<String>,
    pub default_timeout: Duration,
    pub max_error_body_bytes: usize,
}

impl OpenAiClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source. An empty `OPENAI_API_KEY`
    /// counts as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_key = lookup("OPENAI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let default_timeout = lookup("OPENAI_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(120));

        let max_error_body_bytes = lookup("OPENAI_MAX_ERROR_BODY_BYTES")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(8 * 1024);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            default_timeout,
            max_error_body_bytes,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAiClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("upstream returned error: status={status} message={message}")]
    Upstream { status: StatusCode, message: String },

    #[error("upstream returned non-JSON error: status={status} body={body}")]
    UpstreamBody { status: StatusCode, body: String },

    #[error("response has no choices[0].message.content")]
    EmptyCompletion,
}

#[derive(Clone)]
pub struct OpenAiClient {
    config: OpenAiClientConfig,
    http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiClientConfig) -> Result<Self, OpenAiClientError> {
        let http = reqwest::Client::builder()
            .user_agent("nm-eval")
            .build()?;
        Ok(Self { config, http })
    }

    /// Send one chat completion request. No retries: a failure is returned as-is.
    pub async fn chat_completions(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiClientError> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let mut req = self
            .http
            .post(&url)
            .timeout(self.config.default_timeout)
            .json(request);
        if let Some(key) = &self.config.api_key {
            req = req.bearer_auth(key);
        }
        let resp = req.send().await?;
        Self::parse_json_response(resp, self.config.max_error_body_bytes).await
    }

    /// Like [`chat_completions`](Self::chat_completions), but returns only the text of the
    /// first choice.
    pub async fn complete_text(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<String, OpenAiClientError> {
        let response = self.chat_completions(request).await?;
        response
            .first_content()
            .map(str::to_string)
            .ok_or(OpenAiClientError::EmptyCompletion)
    }

    async fn parse_json_response<T: for<'de> Deserialize<'de>>(
        resp: reqwest::Response,
        max_error_body_bytes: usize,
    ) -> Result<T, OpenAiClientError> {
        if resp.status().is_success() {
            let bytes = resp.bytes().await?;
            return Ok(serde_json::from_slice::<T>(&bytes)?);
        }
        Err(Self::to_upstream_error(resp, max_error_body_bytes).await)
    }

    /// The envelope is decoded from the full body; only the raw fallback is capped.
    async fn to_upstream_error(
        resp: reqwest::Response,
        max_error_body_bytes: usize,
    ) -> OpenAiClientError {
        let status = resp.status();
        let body = match resp.bytes().await {
            Ok(b) => b,
            Err(e) => {
                warn!(error = %e, "failed to read upstream error body");
                return OpenAiClientError::UpstreamBody {
                    status,
                    body: "<failed to read error body>".to_string(),
                };
            }
        };
        if let Ok(parsed) = serde_json::from_slice::<OpenAiErrorEnvelope>(&body) {
            let message = parsed
                .error
                .message
                .unwrap_or_else(|| "unknown upstream error".to_string());
            return OpenAiClientError::Upstream { status, message };
        }
        OpenAiClientError::UpstreamBody {
            status,
            body: limited_text(&body, max_error_body_bytes),
        }
    }
}

fn limited_text(body: &[u8], max_bytes: usize) -> String {
    let end = body.len().min(max_bytes);
    String::from_utf8_lossy(&body[..end]).to_string()
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorEnvelope {
    error: OpenAiErrorObject,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorObject {
    message: Option<String>,
    #[allow(dead_code)]
    r#type: Option<String>,
    #[allow(dead_code)]
    code: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
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

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
}

impl ChatCompletionResponse {
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionMessage {
    pub content: Option<String>,
}
