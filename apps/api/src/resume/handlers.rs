//! Axum route handlers for resume upload.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::NewResume;
use crate::models::user::AuthUser;
use crate::resume::extract::{looks_like_pdf, ExtractError};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub resume_id: Uuid,
    pub message: String,
}

struct UploadedFile {
    filename: String,
    content_type: Option<String>,
    data: Bytes,
}

/// POST /resume/upload
///
/// Accepts a multipart `file` field holding a PDF, extracts its text and
/// stores it as the caller's newest resume.
pub async fn handle_upload(
    State(state): State<AppState>,
    user: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let max_bytes = state.config.max_upload_bytes;
    let file = read_file_field(multipart?, max_bytes).await?;

    if file.data.len() > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "File exceeds the {max_bytes} byte limit"
        )));
    }

    let declared_pdf = file.content_type.as_deref() == Some("application/pdf")
        || file.filename.to_ascii_lowercase().ends_with(".pdf");
    if !declared_pdf || !looks_like_pdf(&file.data) {
        return Err(AppError::UnsupportedMediaType(
            "Please upload a PDF".to_string(),
        ));
    }

    let content = state
        .extractor
        .extract(file.data.clone())
        .await
        .map_err(|e| match e {
            ExtractError::Unreadable(msg) => {
                AppError::UnprocessableEntity(format!("Could not read PDF: {msg}"))
            }
            ExtractError::Task(e) => {
                warn!("PDF extraction task failed: {e}");
                AppError::UnprocessableEntity("Could not read PDF".to_string())
            }
        })?;

    if content.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No text could be extracted from the PDF".to_string(),
        ));
    }

    let resume_id = Uuid::new_v4();

    let s3_key = match &state.archive {
        Some(archive) => match archive.store_pdf(user.id, resume_id, file.data).await {
            Ok(key) => Some(key),
            Err(e) => {
                warn!("Archiving resume {resume_id} failed, continuing without it: {e}");
                None
            }
        },
        None => None,
    };

    let row = state
        .storage
        .insert_resume(NewResume {
            id: resume_id,
            user_id: user.id,
            filename: &file.filename,
            content: &content,
            s3_key: s3_key.as_deref(),
        })
        .await?;

    info!(
        "Stored resume {} ({} chars) for user {}",
        row.id,
        content.len(),
        user.id
    );

    Ok(Json(UploadResponse {
        resume_id: row.id,
        message: "Resume uploaded".to_string(),
    }))
}

async fn read_file_field(
    mut multipart: Multipart,
    max_bytes: usize,
) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or("resume.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_bytes))?;
        return Ok(UploadedFile {
            filename,
            content_type,
            data,
        });
    }

    Err(AppError::Validation(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}

fn multipart_error(e: MultipartError, max_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("File exceeds the {max_bytes} byte limit"))
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}
