use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resume_review::analysis::Analyzer;
use resume_review::config::{AnalysisMode, Config};
use resume_review::llm::LLM;
use resume_review::{create_router, AppState};

/// Resume upload and review API server
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Bind host (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// How uploads are analyzed (overrides ANALYSIS_MODE)
    #[arg(long, value_enum)]
    analysis_mode: Option<AnalysisMode>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resume_review=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(mode) = cli.analysis_mode {
        config.analysis.mode = mode;
    }
    config.validate()?;
    info!("Configuration loaded: {:?}", config.server);

    let llm = LLM::from_config(&config.llm);
    if llm.is_none() {
        warn!("No LLM API key configured; /chat will fail until one is set");
    }

    let analyzer = Analyzer::from_mode(config.analysis.mode, llm.clone())
        .context("model analysis requires a configured LLM client")?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.server.host, config.server.port))?;

    // Create shared state
    let state = AppState {
        config,
        analyzer,
        llm,
    };

    let app = create_router(state);

    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
