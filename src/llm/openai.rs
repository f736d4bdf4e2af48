// OpenAI-compatible chat completions adapter
// Works with any endpoint exposing POST {base}/chat/completions

use crate::llm::provider::LLMAdapter;
use crate::types::{AppError, AppResult, LLMRequest, LLMResponse, TokenUsage};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub struct OpenAIAdapter {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Deserialize)]
struct OpenAIErrorResponse {
    error: OpenAIError,
}

#[derive(Deserialize)]
struct OpenAIError {
    message: String,
    #[serde(rename = "type", default)]
    error_type: Option<String>,
}

impl OpenAIAdapter {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: OPENAI_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl LLMAdapter for OpenAIAdapter {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        let messages = request
            .messages
            .iter()
            .map(|m| ChatMessage {
                role: &m.role,
                content: &m.content,
            })
            .collect();

        let body = ChatCompletionRequest {
            model: if request.model.is_empty() {
                self.model.as_str()
            } else {
                request.model.as_str()
            },
            messages,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::LLMApi(format!("OpenAI request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if let Ok(error_response) = serde_json::from_str::<OpenAIErrorResponse>(&error_text) {
                return Err(AppError::LLMApi(format!(
                    "OpenAI API error ({}): {} (type: {:?})",
                    status, error_response.error.message, error_response.error.error_type
                )));
            }

            return Err(AppError::LLMApi(format!(
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::LLMApi(format!("Failed to parse OpenAI response: {}", e)))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::LLMApi("OpenAI returned no choices".to_string()))?;

        let usage = completion
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        Ok(LLMResponse {
            content: choice.message.content.unwrap_or_default(),
            finish_reason: choice.finish_reason.unwrap_or_else(|| "stop".to_string()),
            usage,
        })
    }

    fn default_model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_chat_completion_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-test",
                "messages": [{"role": "user", "content": "Hi"}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "choices": [{"message": {"role": "assistant", "content": "Hello!"}, "finish_reason": "stop"}],
                    "usage": {"prompt_tokens": 4, "completion_tokens": 2, "total_tokens": 6}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let adapter = OpenAIAdapter::new("test-key", "gpt-test").with_base_url(&server.url());
        let response = adapter
            .create_chat_completion(&LLMRequest::single_turn("gpt-test", "Hi"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.content, "Hello!");
        assert_eq!(response.usage.total_tokens, 6);
    }

    #[tokio::test]
    async fn test_unauthorized_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}})
                    .to_string(),
            )
            .create_async()
            .await;

        let adapter = OpenAIAdapter::new("bad-key", "gpt-test").with_base_url(&server.url());
        let err = adapter
            .create_chat_completion(&LLMRequest::single_turn("gpt-test", "Hi"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Incorrect API key provided"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let adapter = OpenAIAdapter::new("test-key", "gpt-test").with_base_url(&server.url());
        let err = adapter
            .create_chat_completion(&LLMRequest::single_turn("gpt-test", "Hi"))
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Failed to parse OpenAI response"));
    }
}
