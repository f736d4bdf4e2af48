use anyhow::Result;
use std::env;

use crate::types::LLMProvider;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// `*` allows any origin
    pub cors_allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

#[derive(Clone)]
pub struct LLMConfig {
    pub provider: LLMProvider,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Option<String>,
}

// Keeps the credential out of startup logs.
impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl LLMConfig {
    pub fn active_api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn default_model(provider: LLMProvider) -> &'static str {
        match provider {
            LLMProvider::Google => crate::llm::google::DEFAULT_MODEL,
            LLMProvider::OpenAI => crate::llm::openai::DEFAULT_MODEL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub mode: AnalysisMode,
}

/// How `/upload_resume` produces its `analysis` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AnalysisMode {
    /// Word-count based mock analysis, no external calls
    #[default]
    Heuristic,
    /// Free-form feedback from the configured LLM
    Model,
}

impl std::str::FromStr for AnalysisMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" | "mock" => Ok(AnalysisMode::Heuristic),
            "model" | "llm" | "ai" => Ok(AnalysisMode::Model),
            other => Err(anyhow::anyhow!("Unknown ANALYSIS_MODE: {}", other)),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let provider: LLMProvider = env::var("LLM_PROVIDER")
            .unwrap_or_else(|_| "google".to_string())
            .parse()?;

        let provider_key_var = match provider {
            LLMProvider::Google => "GOOGLE_API_KEY",
            LLMProvider::OpenAI => "OPENAI_API_KEY",
        };

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .unwrap_or_else(|_| "10485760".to_string())
                    .parse()?,
            },
            llm: LLMConfig {
                provider,
                api_key: env::var("LLM_API_KEY")
                    .or_else(|_| env::var(provider_key_var))
                    .ok()
                    .filter(|k| !k.is_empty()),
                model: env::var("LLM_MODEL")
                    .unwrap_or_else(|_| LLMConfig::default_model(provider).to_string()),
                base_url: env::var("LLM_BASE_URL").ok().filter(|u| !u.is_empty()),
            },
            analysis: AnalysisConfig {
                mode: env::var("ANALYSIS_MODE")
                    .unwrap_or_else(|_| "heuristic".to_string())
                    .parse()?,
            },
        })
    }

    /// Checks combinations that only fail once the server is running
    pub fn validate(&self) -> Result<()> {
        if self.analysis.mode == AnalysisMode::Model && self.llm.active_api_key().is_none() {
            anyhow::bail!(
                "ANALYSIS_MODE=model requires LLM_API_KEY (or the provider's API key variable) to be set"
            );
        }
        if self.server.max_upload_bytes == 0 {
            anyhow::bail!("MAX_UPLOAD_BYTES must be greater than zero");
        }
        Ok(())
    }
}
