//! Model-backed resume feedback
//!
//! Wraps the extracted resume text in a fixed review prompt and returns the
//! model's answer untouched.

use tracing::info;

use crate::llm::LLMAdapter;
use crate::types::{AppResult, LLMRequest};

pub struct FeedbackAgent;

impl FeedbackAgent {
    pub fn create_prompt(resume_text: &str) -> String {
        format!(
            "Please analyze this resume and provide detailed feedback in the following format:\n\
             \n\
             1. Strengths:\n\
             - List the key strengths of the resume\n\
             \n\
             2. Areas for Improvement:\n\
             - List specific areas that need improvement\n\
             \n\
             3. Suggestions:\n\
             - Provide actionable suggestions to enhance the resume\n\
             \n\
             Resume:\n\
             {}",
            resume_text
        )
    }

    /// One synchronous round-trip to the model; failures are returned as-is
    pub async fn generate_feedback(llm: &dyn LLMAdapter, resume_text: &str) -> AppResult<String> {
        let request = LLMRequest::single_turn(llm.default_model(), Self::create_prompt(resume_text));

        let response = llm.create_chat_completion(&request).await?;
        info!(
            resume_len = resume_text.len(),
            feedback_len = response.content.len(),
            "Generated resume feedback"
        );
        Ok(response.content)
    }
}
