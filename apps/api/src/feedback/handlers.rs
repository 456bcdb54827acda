use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::{self, DocumentFormat};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: String,
    /// The extracted text. Nothing is stored server-side; the client sends
    /// this back with the feedback request.
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub resume_text: String,
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

/// POST /api/v1/resumes/extract
///
/// Multipart upload with a single `file` part. The declared content type
/// decides the extractor; a generic type falls back to the file extension.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| "resume".to_string());
        let content_type = field.content_type().map(str::to_string);

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;

        let format = resolve_format(content_type.as_deref(), &file_name)?;
        let resume_text = extract::extract_text(format, data).await?;

        info!(
            "Extracted {} chars from '{}' ({:?})",
            resume_text.len(),
            file_name,
            format
        );

        return Ok(Json(ExtractResponse {
            file_name,
            resume_text,
        }));
    }

    Err(AppError::Validation(
        "Upload must contain a 'file' part.".to_string(),
    ))
}

/// POST /api/v1/resumes/feedback
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume text is empty. Upload a resume first.".to_string(),
        ));
    }

    let question = req
        .question
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty());

    let feedback = state.feedback.review(&req.resume_text, question).await?;

    Ok(Json(FeedbackResponse { feedback }))
}

/// Picks the extractor from the declared MIME type, falling back to the file
/// extension when the client sent a generic type.
fn resolve_format(content_type: Option<&str>, file_name: &str) -> Result<DocumentFormat, AppError> {
    content_type
        .and_then(DocumentFormat::from_mime)
        .or_else(|| DocumentFormat::from_file_name(file_name))
        .ok_or_else(|| {
            AppError::UnsupportedFormat(format!(
                "content type {:?}, file '{file_name}'",
                content_type.unwrap_or("unknown")
            ))
        })
}
