//! Document text extraction for uploaded resumes.
//!
//! Two formats are accepted: PDF and WordprocessingML (DOCX). Extraction
//! walks the document in order and concatenates its visible text runs.
//! An empty or whitespace-only result is an extraction failure, reported to
//! the caller rather than passed downstream.

mod docx;
mod pdf;

use bytes::Bytes;
use thiserror::Error;

use crate::errors::AppError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported document type: {0}")]
    Unsupported(String),

    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("no extractable text in document")]
    NoText,
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Unsupported(detail) => AppError::UnsupportedFormat(detail),
            ExtractError::Malformed(_) | ExtractError::NoText => AppError::Extraction(
                "Could not extract any text from the resume. Please try another file.".to_string(),
            ),
        }
    }
}

/// The document formats the upload endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        // Some clients append parameters ("; charset=...") to the type
        let essence = mime.split(';').next().unwrap_or(mime).trim();
        match essence {
            PDF_MIME => Some(DocumentFormat::Pdf),
            DOCX_MIME => Some(DocumentFormat::Docx),
            _ => None,
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = name.rsplit('.').next()?;
        if ext.eq_ignore_ascii_case("pdf") {
            Some(DocumentFormat::Pdf)
        } else if ext.eq_ignore_ascii_case("docx") {
            Some(DocumentFormat::Docx)
        } else {
            None
        }
    }
}

/// Extracts the text content of `bytes` according to `format`.
///
/// Both backends are CPU-bound parsers, so the work runs on the blocking
/// pool. Returns `ExtractError::NoText` when extraction succeeds but yields
/// nothing visible.
pub async fn extract_text(format: DocumentFormat, bytes: Bytes) -> Result<String, ExtractError> {
    let text = tokio::task::spawn_blocking(move || match format {
        DocumentFormat::Pdf => pdf::extract(&bytes),
        DocumentFormat::Docx => docx::extract(&bytes),
    })
    .await
    .map_err(|e| ExtractError::Malformed(format!("extraction task failed: {e}")))??;

    if text.trim().is_empty() {
        return Err(ExtractError::NoText);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_mime() {
        assert_eq!(
            DocumentFormat::from_mime("application/pdf"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::from_mime(DOCX_MIME),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(DocumentFormat::from_mime("text/plain"), None);
    }

    #[test]
    fn format_from_mime_ignores_parameters() {
        assert_eq!(
            DocumentFormat::from_mime("application/pdf; charset=binary"),
            Some(DocumentFormat::Pdf)
        );
    }

    #[test]
    fn format_from_file_name() {
        assert_eq!(
            DocumentFormat::from_file_name("resume.PDF"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::from_file_name("resume.docx"),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(DocumentFormat::from_file_name("resume.txt"), None);
        assert_eq!(DocumentFormat::from_file_name("resume"), None);
    }

    #[tokio::test]
    async fn garbage_pdf_is_malformed() {
        let result = extract_text(DocumentFormat::Pdf, Bytes::from_static(b"not a pdf")).await;
        assert!(matches!(result, Err(ExtractError::Malformed(_))));
    }

    #[tokio::test]
    async fn garbage_docx_is_malformed() {
        let result = extract_text(DocumentFormat::Docx, Bytes::from_static(b"not a zip")).await;
        assert!(matches!(result, Err(ExtractError::Malformed(_))));
    }

    #[test]
    fn unsupported_becomes_415_error() {
        let app_err: AppError = ExtractError::Unsupported("text/plain".to_string()).into();
        assert!(matches!(app_err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn no_text_becomes_extraction_error() {
        let app_err: AppError = ExtractError::NoText.into();
        assert!(matches!(app_err, AppError::Extraction(_)));
    }
}
