use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::llm::LLMAdapter;
use crate::types::LLMMessage;

/// Shared, read-only request context
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub analyzer: Analyzer,
    /// `None` when no API key is configured; `/chat` then fails with 500
    pub llm: Option<Arc<dyn LLMAdapter>>,
}

// Analysis results

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HeuristicAnalysis {
    pub summary: String,
    pub metrics: ResumeMetrics,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ResumeMetrics {
    pub word_count: usize,
    pub readability_score: usize,
}

/// Either a structured heuristic record or the model's free text
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Analysis {
    Heuristic(HeuristicAnalysis),
    Feedback(String),
}

// API Request/Response types

#[derive(Debug, serde::Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub text: String,
    pub analysis: Analysis,
}

#[derive(Debug, serde::Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<LLMMessage>,
}

#[derive(Debug, serde::Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
