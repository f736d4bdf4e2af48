// In-process stand-in for the external model, used by tests

use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm::provider::LLMAdapter;
use crate::types::{AppError, AppResult, LLMRequest, LLMResponse, TokenUsage};

pub struct FakeLLM {
    reply: Result<String, String>,
    requests: Mutex<Vec<LLMRequest>>,
}

impl FakeLLM {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<LLMRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMAdapter for FakeLLM {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.requests.lock().unwrap().push(request.clone());

        match &self.reply {
            Ok(content) => Ok(LLMResponse {
                content: content.clone(),
                finish_reason: "stop".to_string(),
                usage: TokenUsage::default(),
            }),
            Err(message) => Err(AppError::LLMApi(message.clone())),
        }
    }

    fn default_model(&self) -> &str {
        "fake-model"
    }
}
