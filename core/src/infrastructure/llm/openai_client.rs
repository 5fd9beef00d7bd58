use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    recipe::{
        entities::{ChatCompletion, CompletionError},
        ports::LLMClient,
    },
};

#[derive(Debug, Clone)]
pub struct OpenAiLLMClient {
    base_url: String,
    model: String,
    max_tokens: u32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::ExternalServiceError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl LLMClient for OpenAiLLMClient {
    async fn complete_chat(
        &self,
        api_key: String,
        prompt: String,
    ) -> Result<ChatCompletion, CompletionError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {:?}", e);
                CompletionError::Transport {
                    message: e.to_string(),
                    detail: format!("{:?}", e),
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read OpenAI response body: {:?}", e);
            CompletionError::Transport {
                message: e.to_string(),
                detail: format!("{:?}", e),
            }
        })?;

        if !status.is_success() {
            return Err(CompletionError::Transport {
                message: format!("OpenAI API returned {}", status),
                detail: body,
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| CompletionError::Transport {
                message: format!("Malformed response from OpenAI API: {}", e),
                detail: body.clone(),
            })?;

        let parsed = serde_json::from_value::<ChatCompletionResponse>(value).ok();
        let model = parsed.as_ref().and_then(|r| r.model.clone());

        parsed
            .and_then(|r| r.choices.into_iter().next())
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| ChatCompletion { content, model })
            .ok_or(CompletionError::MissingContent { raw_body: body })
    }
}
