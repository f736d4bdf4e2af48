// Type definitions and error handling

use axum::extract::multipart::MultipartError;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LLMProvider {
    Google,
    OpenAI,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::Google => write!(f, "google"),
            LLMProvider::OpenAI => write!(f, "openai"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" | "gemini" => Ok(LLMProvider::Google),
            "openai" => Ok(LLMProvider::OpenAI),
            other => Err(AppError::InvalidRequest(format!(
                "Unsupported LLM provider: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LLMRequest {
    pub model: String,
    pub messages: Vec<LLMMessage>,
}

impl LLMRequest {
    /// A request carrying a single user turn
    pub fn single_turn(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![LLMMessage::user(content)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LLMMessage {
    pub role: String, // "user" or "assistant"
    pub content: String,
}

impl LLMMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LLMResponse {
    pub content: String,
    pub finish_reason: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file uploaded")]
    NoFile,

    #[error("Unsupported file type. Please upload a PDF or DOCX file.")]
    UnsupportedFileType,

    #[error("Error processing {kind}: {message}")]
    Extraction { kind: &'static str, message: String },

    #[error("{0}")]
    InvalidRequest(String),

    /// Malformed request rejected while extracting it; keeps the extractor's status
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("{0}")]
    LLMApi(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NoFile
            | AppError::UnsupportedFileType
            | AppError::Extraction { .. }
            | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected { status, .. } => *status,
            AppError::LLMApi(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

// Oversized uploads surface here as 413.
impl From<MultipartError> for AppError {
    fn from(error: MultipartError) -> Self {
        AppError::Rejected {
            status: error.status(),
            message: error.body_text(),
        }
    }
}

/// Error body shape: `{"detail": "..."}`
#[derive(Debug, serde::Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
