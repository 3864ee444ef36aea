use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TranslateError;

/// One entry of the conversation sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
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

/// A chat-completion request in the OpenAI-compatible wire shape.
///
/// `stop` is always serialized, so a disabled stop-sequence setting goes
/// over the wire as an explicit `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub stop: Option<Vec<String>>,
}

/// The one field of the remote reply this program consumes.
///
/// The content is kept as a raw JSON value; whether it is actually text is
/// the translator's postcondition, not the client's concern.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub content: Value,
}

/// The chat-completion collaborator.
///
/// [`XaiClient`] is the production implementation; tests substitute a stub
/// to observe the requests the translator builds.
#[async_trait]
pub trait ChatCompletion {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatReply, TranslateError>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<Value>,
}

/// Non-streaming client for the xAI chat-completions endpoint.
pub struct XaiClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl XaiClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl ChatCompletion for XaiClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatReply, TranslateError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let mut http_request = self.client.post(&url).json(request);

        // Add Authorization header if API key is present
        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api { status, body });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        // An empty choices array or absent content field reads as null and
        // fails the translator's textual postcondition downstream.
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or(Value::Null);

        Ok(ChatReply { content })
    }
}
