use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use tracing::info;

use crate::extraction::extract_text_blocking;
use crate::models::{AppState, UploadResponse};
use crate::types::{AppError, AppResult};

const FILE_FIELD: &str = "file";

pub fn router(state: AppState) -> Router {
    let max_upload_bytes = state.config.server.max_upload_bytes;

    Router::new()
        .route("/upload_resume", post(upload_resume))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

async fn upload_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    let mut multipart = multipart?;
    let (filename, bytes) = read_file_field(&mut multipart).await?;
    info!(filename = %filename, bytes = bytes.len(), "Resume upload received");

    let text = extract_text_blocking(filename.clone(), bytes).await?;
    let analysis = state.analyzer.analyze(&text).await?;

    info!(
        filename = %filename,
        words = text.split_whitespace().count(),
        mode = ?state.analyzer.mode(),
        "Resume analyzed"
    );

    Ok(Json(UploadResponse {
        filename,
        text,
        analysis,
    }))
}

/// First `file` field with a non-empty filename, or `NoFile`
async fn read_file_field(multipart: &mut Multipart) -> AppResult<(String, Vec<u8>)> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(AppError::NoFile),
        };
        let bytes = field.bytes().await?;

        return Ok((filename, bytes.to_vec()));
    }

    Err(AppError::NoFile)
}
