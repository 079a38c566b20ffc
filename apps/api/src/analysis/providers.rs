// Provider Adapters: one per LLM provider, all behind `AnalysisProvider`.
// An adapter owns its prompt and endpoint quirks and hands back the parsed,
// still-untyped JSON object. It keeps no state between calls.

use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::analysis::models::ProviderResult;
use crate::analysis::prompts::{
    DEEPSEEK_PREAMBLE, DEEPSEEK_SCHEMA, OPENAI_PREAMBLE, OPENAI_SCHEMA, OPENAI_USER_TEMPLATE,
};
use crate::llm_client::prompts::build_system_prompt;
use crate::llm_client::{ChatEndpoint, LlmClient, LlmError};

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEEPSEEK_URL: &str = "https://api.deepseek.com/v1/chat/completions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    OpenAi,
    DeepSeek,
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::OpenAi => f.write_str("openai"),
            ProviderId::DeepSeek => f.write_str("deepseek"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider credential not configured")]
    Unavailable,

    #[error("request failed: {0}")]
    Request(String),

    #[error("response could not be parsed: {0}")]
    Parse(String),
}

impl From<LlmError> for ProviderError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Http(_) | LlmError::Api { .. } => ProviderError::Request(err.to_string()),
            LlmError::Parse(_) | LlmError::EmptyContent | LlmError::JsonNotFound => {
                ProviderError::Parse(err.to_string())
            }
        }
    }
}

/// One external analysis provider.
///
/// Carried by the orchestrator as `Arc<dyn AnalysisProvider>` so tests can
/// substitute canned providers.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    fn id(&self) -> ProviderId;

    /// False when no credential is configured; the orchestrator skips it.
    fn is_available(&self) -> bool;

    /// Longest resume prefix (in characters) this provider is sent.
    fn max_input_chars(&self) -> usize;

    /// Appended to the input when it had to be cut.
    fn truncation_marker(&self) -> &'static str {
        ""
    }

    async fn analyze(&self, resume_text: &str) -> Result<ProviderResult, ProviderError>;
}

/// Chat-completions provider: OpenAI or DeepSeek depending on construction.
pub struct ChatProvider {
    id: ProviderId,
    client: Option<LlmClient>,
    system_prompt: String,
    user_template: Option<&'static str>,
    max_input_chars: usize,
    truncation_marker: &'static str,
}

impl ChatProvider {
    pub fn openai(api_key: Option<String>, use_gpt4: bool) -> Result<Self, LlmError> {
        let endpoint = ChatEndpoint {
            url: OPENAI_URL,
            model: if use_gpt4 { "gpt-4" } else { "gpt-3.5-turbo" }.to_string(),
            temperature: 0.7,
            max_tokens: 4000,
            json_mode: true,
            timeout: Duration::from_secs(120),
        };
        Ok(Self {
            id: ProviderId::OpenAi,
            client: build_client(api_key, endpoint)?,
            system_prompt: build_system_prompt(OPENAI_PREAMBLE, OPENAI_SCHEMA),
            user_template: Some(OPENAI_USER_TEMPLATE),
            max_input_chars: 3000,
            truncation_marker: "...",
        })
    }

    pub fn deepseek(api_key: Option<String>) -> Result<Self, LlmError> {
        let endpoint = ChatEndpoint {
            url: DEEPSEEK_URL,
            model: "deepseek-reasoner".to_string(),
            temperature: 0.2,
            max_tokens: 4000,
            json_mode: false,
            timeout: Duration::from_secs(60),
        };
        Ok(Self {
            id: ProviderId::DeepSeek,
            client: build_client(api_key, endpoint)?,
            system_prompt: build_system_prompt(DEEPSEEK_PREAMBLE, DEEPSEEK_SCHEMA),
            user_template: None,
            max_input_chars: 4000,
            truncation_marker: "",
        })
    }

    pub fn model(&self) -> Option<&str> {
        self.client.as_ref().map(LlmClient::model)
    }

    fn user_prompt<'a>(&self, resume_text: &'a str) -> Cow<'a, str> {
        match self.user_template {
            Some(template) => Cow::Owned(template.replace("{resume_text}", resume_text)),
            None => Cow::Borrowed(resume_text),
        }
    }
}

fn build_client(api_key: Option<String>, endpoint: ChatEndpoint) -> Result<Option<LlmClient>, LlmError> {
    api_key
        .filter(|key| !key.trim().is_empty())
        .map(|key| LlmClient::new(key, endpoint))
        .transpose()
}

#[async_trait]
impl AnalysisProvider for ChatProvider {
    fn id(&self) -> ProviderId {
        self.id
    }

    fn is_available(&self) -> bool {
        self.client.is_some()
    }

    fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    fn truncation_marker(&self) -> &'static str {
        self.truncation_marker
    }

    async fn analyze(&self, resume_text: &str) -> Result<ProviderResult, ProviderError> {
        let client = self.client.as_ref().ok_or(ProviderError::Unavailable)?;
        let value = client
            .call_json(&self.system_prompt, &self.user_prompt(resume_text))
            .await?;

        if !value.is_object() {
            return Err(ProviderError::Parse(
                "expected a JSON object at the top level".to_string(),
            ));
        }
        Ok(ProviderResult(value))
    }
}

/// Keeps the first `max_chars` characters, appending `marker` when anything was cut.
pub fn truncate_chars<'a>(text: &'a str, max_chars: usize, marker: &str) -> Cow<'a, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((byte_index, _)) => Cow::Owned(format!("{}{}", &text[..byte_index], marker)),
    }
}
