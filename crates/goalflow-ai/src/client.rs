use std::time::Duration;

use goalflow_core::config::AiConfig;
use serde::{Deserialize, Serialize};

use crate::{AiError, Result};

// ─── Wire types ───────────────────────────────────────────────────────────

/// One chat turn as the completions endpoint expects it.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

impl ResponseFormat {
    fn json_object() -> Self {
        Self {
            kind: "json_object",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantReply,
}

#[derive(Debug, Deserialize)]
struct AssistantReply {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

// ─── ChatClient ───────────────────────────────────────────────────────────

/// Blocking client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Model, base URL, temperature, and token limits all come from the
/// [`AiConfig`] it is built with; the key is supplied separately so it never
/// transits the config file.
pub struct ChatClient {
    http: reqwest::blocking::Client,
    config: AiConfig,
    api_key: String,
}

impl ChatClient {
    pub fn new(config: AiConfig, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            config,
            api_key: api_key.into(),
        })
    }

    /// Build a client reading the key from the environment variable named in
    /// the config (`OPENAI_API_KEY` by default).
    pub fn from_env(config: AiConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| AiError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(config, api_key)
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Send one completion request and return the assistant's text.
    ///
    /// `json_object` asks the endpoint to constrain the reply to a single
    /// JSON object. A reply with no choices or empty content is
    /// [`AiError::EmptyReply`].
    pub fn complete(
        &self,
        messages: Vec<ChatMessage>,
        max_tokens: u32,
        json_object: bool,
    ) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
            max_tokens,
            response_format: json_object.then(ResponseFormat::json_object),
        };
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ChatResponse = response.json()?;
        if let Some(usage) = &reply.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "chat completion finished"
            );
        }

        reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or(AiError::EmptyReply)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
