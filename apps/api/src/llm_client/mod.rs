/// LLM Client: the single HTTP path to the chat-completions providers.
///
/// Both resume-analysis providers speak the OpenAI chat-completions dialect,
/// so one client parameterized by a [`ChatEndpoint`] serves them all.
/// Calls are never retried here; a failed call is final for the request.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("no JSON object found in LLM output")]
    JsonNotFound,
}

/// Static description of one provider's chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct ChatEndpoint {
    pub url: &'static str,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Sends `response_format: {"type": "json_object"}` when the provider supports it.
    pub json_mode: bool,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Text of the first choice, if the provider sent any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: ChatEndpoint,
}

impl LlmClient {
    pub fn new(api_key: String, endpoint: ChatEndpoint) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(endpoint.timeout).build()?;
        Ok(Self {
            client,
            api_key,
            endpoint,
        })
    }

    pub fn model(&self) -> &str {
        &self.endpoint.model
    }

    /// Makes one chat-completions call and returns the decoded response.
    pub async fn call(&self, system: &str, prompt: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: &self.endpoint.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.endpoint.temperature,
            max_tokens: self.endpoint.max_tokens,
            response_format: self.endpoint.json_mode.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        let response = self
            .client
            .post(self.endpoint.url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(
                "LLM error body from {} (status {}): {body}",
                self.endpoint.model,
                status.as_u16()
            );
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let chat_response: ChatResponse = response.json().await?;
        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={}, completion_tokens={}",
                self.endpoint.model, usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }

    /// Calls the provider and parses its text as JSON, tolerating fences and
    /// prose around the object.
    pub async fn call_json(&self, system: &str, prompt: &str) -> Result<Value, LlmError> {
        let response = self.call(system, prompt).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        parse_json_payload(text)
    }
}

const MAX_ERROR_MESSAGE_CHARS: usize = 200;

/// Pulls a short message out of an error body: `{"error": {"message": ..}}`
/// or `{"error": ".."}`. Anything else stays out of the error; the raw body is
/// only ever logged at debug.
fn api_error_message(body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(|e| e.get("message").and_then(Value::as_str).or_else(|| e.as_str()))
        .map(|message| message.chars().take(MAX_ERROR_MESSAGE_CHARS).collect())
        .unwrap_or_else(|| "provider returned no error message".to_string())
}

/// Parses model output into JSON: the whole text first, then the first
/// balanced `{...}` span.
pub fn parse_json_payload(text: &str) -> Result<Value, LlmError> {
    let text = strip_json_fences(text);
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }
    let object = locate_json_object(text).ok_or(LlmError::JsonNotFound)?;
    serde_json::from_str(object).map_err(LlmError::Parse)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Finds the first balanced `{...}` span, ignoring braces inside JSON strings.
fn locate_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}
