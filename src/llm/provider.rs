use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::LLMConfig;
use crate::types::{AppError, AppResult, LLMProvider, LLMRequest, LLMResponse};

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;

    /// Model used when a caller has no preference of its own
    fn default_model(&self) -> &str;
}

/// Configured client for the external model, shared through `AppState`
pub struct LLM {
    adapter: Box<dyn LLMAdapter>,
    provider: LLMProvider,
}

impl LLM {
    pub fn new(provider: LLMProvider, api_key: &str, model: &str, base_url: Option<&str>) -> Self {
        let adapter: Box<dyn LLMAdapter> = match provider {
            LLMProvider::Google => {
                let adapter = crate::llm::google::GoogleAdapter::new(api_key, model);
                match base_url {
                    Some(url) => Box::new(adapter.with_base_url(url)),
                    None => Box::new(adapter),
                }
            }
            LLMProvider::OpenAI => {
                let adapter = crate::llm::openai::OpenAIAdapter::new(api_key, model);
                match base_url {
                    Some(url) => Box::new(adapter.with_base_url(url)),
                    None => Box::new(adapter),
                }
            }
        };

        Self { adapter, provider }
    }

    /// Builds the shared client, or `None` when no credential is configured
    pub fn from_config(config: &LLMConfig) -> Option<Arc<dyn LLMAdapter>> {
        let api_key = config.active_api_key()?;
        info!(provider = %config.provider, model = %config.model, "LLM client configured");
        Some(Arc::new(Self::new(
            config.provider,
            api_key,
            &config.model,
            config.base_url.as_deref(),
        )))
    }
}

#[async_trait]
impl LLMAdapter for LLM {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        if request.messages.is_empty() {
            return Err(AppError::InvalidRequest(
                "LLM request has no messages".to_string(),
            ));
        }

        debug!(
            provider = %self.provider,
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat completion"
        );
        let response = self.adapter.create_chat_completion(request).await?;
        debug!(
            provider = %self.provider,
            finish_reason = %response.finish_reason,
            total_tokens = response.usage.total_tokens,
            "Chat completion finished"
        );
        Ok(response)
    }

    fn default_model(&self) -> &str {
        self.adapter.default_model()
    }
}
