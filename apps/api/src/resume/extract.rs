//! PDF → plain text.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not read PDF: {0}")]
    Unreadable(String),

    #[error("extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, pdf: Bytes) -> Result<String, ExtractError>;
}

/// `pdf-extract` on the blocking pool; parsing is CPU-bound.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, pdf: Bytes) -> Result<String, ExtractError> {
        debug!("Extracting text from PDF ({} bytes)", pdf.len());

        let raw = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&pdf)
                .map_err(|e| ExtractError::Unreadable(e.to_string()))
        })
        .await??;

        Ok(normalize_text(&raw))
    }
}

/// Trims line endings and collapses runs of blank lines into one.
pub fn normalize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut blank_run = false;
    for line in raw.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            blank_run = true;
            continue;
        }
        if blank_run && !out.is_empty() {
            out.push('\n');
        }
        blank_run = false;
        out.push_str(line);
        out.push('\n');
    }
    out.trim_end().to_string()
}

/// True if the bytes carry the PDF header signature.
pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF-")
}
