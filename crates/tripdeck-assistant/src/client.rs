//! Client for an OpenAI-compatible chat-completions endpoint (Groq).

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};

use crate::error::AssistantError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One conversation turn. Extra fields sent by chat UIs are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    stream: bool,
    messages: Vec<&'a ChatMessage>,
}

pub struct ChatClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
}

impl ChatClient {
    /// # Errors
    ///
    /// Returns [`AssistantError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`AssistantError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(
        api_key: &str,
        model: &str,
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| AssistantError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Starts a streaming completion with `system` prepended to `messages`.
    ///
    /// The returned response has a 2xx status; its body is the upstream
    /// server-sent event stream, to be forwarded with `bytes_stream()`.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::Http`] on transport failure and
    /// [`AssistantError::UnexpectedStatus`] for a non-2xx upstream answer.
    pub async fn stream_completion(
        &self,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<Response, AssistantError> {
        let url = self
            .base_url
            .join("chat/completions")
            .map_err(|e| AssistantError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;

        let system = ChatMessage {
            role: ChatRole::System,
            content: system.to_owned(),
        };
        let body = CompletionRequest {
            model: &self.model,
            stream: true,
            messages: std::iter::once(&system).chain(messages).collect(),
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "chat upstream rejected request");
            return Err(AssistantError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(model = %self.model, turns = messages.len(), "chat stream started");
        Ok(response)
    }
}
