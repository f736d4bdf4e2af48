use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use crate::models::{AppState, ChatRequest, ChatResponse};
use crate::routes::AppJson;
use crate::types::{AppError, AppResult, LLMRequest};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(post_chat))
        .with_state(state)
}

/// Relays only the newest message; earlier turns are not replayed
pub async fn post_chat(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    info!(messages = request.messages.len(), "Received chat request");

    let latest = request
        .messages
        .last()
        .ok_or_else(|| AppError::InvalidRequest("No messages provided".to_string()))?;

    let llm = state
        .llm
        .as_ref()
        .ok_or_else(|| AppError::LLMApi("LLM API key is not configured".to_string()))?;

    let llm_request = LLMRequest::single_turn(llm.default_model(), latest.content.clone());
    let response = llm.create_chat_completion(&llm_request).await?;

    info!(response_len = response.content.len(), "Chat response sent");

    Ok(Json(ChatResponse {
        response: response.content,
    }))
}
