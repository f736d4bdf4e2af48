// Google Gemini adapter
// API Reference: https://ai.google.dev/api/generate-content

use crate::llm::provider::LLMAdapter;
use crate::types::{AppError, AppResult, LLMMessage, LLMRequest, LLMResponse, TokenUsage};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const GOOGLE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub struct GoogleAdapter {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GoogleAdapter {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: GOOGLE_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Gemini calls the assistant role "model"
    fn convert_messages(messages: &[LLMMessage]) -> Vec<GeminiContent> {
        messages
            .iter()
            .map(|msg| {
                let role = match msg.role.as_str() {
                    "assistant" | "model" => "model",
                    _ => "user",
                };
                GeminiContent {
                    role: Some(role.to_string()),
                    parts: vec![GeminiPart {
                        text: msg.content.clone(),
                    }],
                }
            })
            .collect()
    }
}

#[async_trait]
impl LLMAdapter for GoogleAdapter {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        let model = if request.model.is_empty() {
            &self.model
        } else {
            &request.model
        };
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let body = GenerateContentRequest {
            contents: Self::convert_messages(&request.messages),
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::LLMApi(format!("Gemini request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&error_text) {
                return Err(AppError::LLMApi(format!(
                    "Gemini API error ({}): {} (status: {})",
                    status,
                    error_response.error.message,
                    error_response.error.status.unwrap_or_default()
                )));
            }

            return Err(AppError::LLMApi(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let gemini_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::LLMApi(format!("Failed to parse Gemini response: {}", e)))?;

        let candidate = gemini_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AppError::LLMApi("Gemini returned no candidates".to_string()))?;

        let content = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let usage = gemini_response
            .usage_metadata
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_token_count,
                completion_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            })
            .unwrap_or_default();

        Ok(LLMResponse {
            content,
            finish_reason: candidate.finish_reason.unwrap_or_else(|| "STOP".to_string()),
            usage,
        })
    }

    fn default_model(&self) -> &str {
        &self.model
    }
}
