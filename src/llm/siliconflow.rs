use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::http;
use crate::llm::client::{LlmProvider, SummaryRequest};
use crate::llm::prompts::{build_user_message, SYSTEM_PROMPT};
use crate::Result;

const ENDPOINT: &str = "chat completion";

/// Chat-completion client for the SiliconFlow OpenAI-compatible API.
pub struct SiliconFlowChatClient {
    http: Client,
    api_key: String,
    model: String,
    url: String,
}

impl SiliconFlowChatClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_client(config, http::build_client()?))
    }

    /// Use a caller-provided HTTP client
    pub fn with_client(config: &ClientConfig, http: Client) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            model: config.summary_model.clone(),
            url: config.chat_url.clone(),
        }
    }

    fn build_request(&self, request: &SummaryRequest<'_>) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_user_message(request.summary_type, request.text),
                },
            ],
            stream: false,
        }
    }
}

#[async_trait]
impl LlmProvider for SiliconFlowChatClient {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String> {
        let body = self.build_request(&request);

        tracing::debug!(
            "Requesting {} summary from {} ({} chars)",
            request.summary_type,
            self.model,
            request.text.chars().count()
        );

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let response = http::ensure_success(response, ENDPOINT).await?;
        let payload: ChatCompletionResponse = http::read_json(response, ENDPOINT).await?;

        Ok(payload.into_content())
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, or empty when the model returned nothing.
    fn into_content(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default()
    }
}
