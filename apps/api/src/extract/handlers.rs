use axum::{extract::Multipart, Json};
use anyhow::anyhow;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::extract::{detect_media, extract_text};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text: String,
}

/// POST /api/v1/upload
///
/// Accepts a multipart form with a `syllabus` file field, extracts its plain
/// text, and returns it for the client to preview and submit to the parse
/// endpoint.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        if field.name() != Some("syllabus") {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        let mime = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let kind = detect_media(&mime, &name).ok_or(AppError::UnsupportedMediaType)?;
        debug!(?kind, bytes = data.len(), "extracting syllabus text");

        // PDF extraction is CPU-bound; keep it off the async workers.
        let text = tokio::task::spawn_blocking(move || extract_text(kind, &data))
            .await
            .map_err(|e| AppError::Internal(anyhow!("extraction task failed: {e}")))?
            .map_err(|e| AppError::ExtractionFailed(e.to_string()))?;

        return Ok(Json(UploadResponse { text }));
    }

    Err(AppError::Validation("No syllabus file uploaded".to_string()))
}
