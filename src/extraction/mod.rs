//! Document text extraction
//!
//! Turns an uploaded PDF or Word document into plain text. The format is
//! picked from the filename's extension; the bytes are never sniffed.

pub mod docx;
pub mod pdf;

use tracing::{debug, info};

use crate::types::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Lowercased suffix after the last `.`; `doc` is handled as `docx`
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = filename.rsplit('.').next()?.to_lowercase();
        match extension.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" | "doc" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
        }
    }
}

/// Extract plain text from `bytes`, dispatching on `filename`'s extension
pub fn extract_text(filename: &str, bytes: &[u8]) -> AppResult<String> {
    let kind = DocumentKind::from_filename(filename).ok_or(AppError::UnsupportedFileType)?;
    debug!(filename, kind = kind.label(), bytes = bytes.len(), "Extracting text");

    let text = match kind {
        DocumentKind::Pdf => pdf::extract(bytes),
        DocumentKind::Docx => docx::extract(bytes),
    }
    .map_err(|message| AppError::Extraction {
        kind: kind.label(),
        message,
    })?;

    info!(filename, kind = kind.label(), chars = text.len(), "Text extracted");
    Ok(text)
}

/// Runs [`extract_text`] on the blocking pool; parsing is CPU-bound
pub async fn extract_text_blocking(filename: String, bytes: Vec<u8>) -> AppResult<String> {
    tokio::task::spawn_blocking(move || extract_text(&filename, &bytes))
        .await
        .map_err(|e| AppError::Internal(format!("Extraction task failed: {}", e)))?
}
