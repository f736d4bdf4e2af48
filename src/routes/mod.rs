//! API Routes
//!
//! - `/upload_resume` - Resume upload, text extraction and analysis
//! - `/chat` - Stateless chat relay to the external model
//! - `/health` - Health check

pub mod chat;
pub mod health;
pub mod upload;

use axum::extract::FromRequest;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors_layer;
use crate::models::AppState;
use crate::types::AppError;

/// `Json` whose rejections answer with the `{"detail": ...}` error body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!(analysis_mode = ?state.analyzer.mode(), "Creating application router");

    let cors = cors_layer(&state.config.server.cors_allowed_origins);

    Router::new()
        .merge(upload::router(state.clone()))
        .merge(chat::router(state))
        .merge(health::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
