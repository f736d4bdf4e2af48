// Resume analysis: heuristic scoring or model feedback

pub mod heuristic;
pub mod model;

use std::sync::Arc;

use crate::config::AnalysisMode;
use crate::llm::LLMAdapter;
use crate::models::Analysis;
use crate::types::AppResult;

pub use model::FeedbackAgent;

/// The analysis strategy `/upload_resume` runs, fixed at startup
#[derive(Clone)]
pub enum Analyzer {
    Heuristic,
    Model(Arc<dyn LLMAdapter>),
}

impl Analyzer {
    /// `None` when model mode is requested without a configured client
    pub fn from_mode(mode: AnalysisMode, llm: Option<Arc<dyn LLMAdapter>>) -> Option<Self> {
        match mode {
            AnalysisMode::Heuristic => Some(Analyzer::Heuristic),
            AnalysisMode::Model => llm.map(Analyzer::Model),
        }
    }

    pub fn mode(&self) -> AnalysisMode {
        match self {
            Analyzer::Heuristic => AnalysisMode::Heuristic,
            Analyzer::Model(_) => AnalysisMode::Model,
        }
    }

    pub async fn analyze(&self, text: &str) -> AppResult<Analysis> {
        match self {
            Analyzer::Heuristic => Ok(Analysis::Heuristic(heuristic::analyze(text))),
            Analyzer::Model(llm) => FeedbackAgent::generate_feedback(llm.as_ref(), text)
                .await
                .map(Analysis::Feedback),
        }
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Analyzer::{:?}", self.mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::fake::FakeLLM;

    #[test]
    fn test_model_mode_needs_client() {
        assert!(Analyzer::from_mode(AnalysisMode::Model, None).is_none());
        assert!(matches!(
            Analyzer::from_mode(AnalysisMode::Heuristic, None),
            Some(Analyzer::Heuristic)
        ));
    }

    #[tokio::test]
    async fn test_heuristic_analyzer_makes_no_calls() {
        let analysis = Analyzer::Heuristic.analyze("one two three").await.unwrap();
        match analysis {
            Analysis::Heuristic(h) => assert_eq!(h.metrics.word_count, 3),
            other => panic!("unexpected analysis: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_model_analyzer_forwards_prompt() {
        let fake = Arc::new(FakeLLM::replying("Strong Rust background."));
        let client: Arc<dyn LLMAdapter> = fake.clone();
        let analyzer = Analyzer::from_mode(AnalysisMode::Model, Some(client)).unwrap();

        let analysis = analyzer.analyze("Jane Doe, Rust engineer").await.unwrap();
        assert!(matches!(analysis, Analysis::Feedback(ref s) if s == "Strong Rust background."));

        let requests = fake.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].messages.len(), 1);
        assert_eq!(requests[0].messages[0].role, "user");
        assert!(requests[0].messages[0].content.ends_with("Jane Doe, Rust engineer"));
    }

    #[tokio::test]
    async fn test_model_failure_surfaces() {
        let fake = Arc::new(FakeLLM::failing("quota exceeded"));
        let analyzer = Analyzer::Model(fake);

        let err = analyzer.analyze("text").await.unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
    }
}
