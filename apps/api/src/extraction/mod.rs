//! Resume text extraction for uploaded PDF and DOCX files.

pub mod docx;
pub mod pdf;

use std::path::Path;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("PDF parse error: {0}")]
    Pdf(String),

    #[error("DOCX parse error: {0}")]
    Docx(String),

    #[error("Could not extract text from resume.")]
    EmptyText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Picks the parser from the file extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractionError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|v| v.to_str())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            _ => Err(ExtractionError::UnsupportedFileType(file_name.to_string())),
        }
    }
}

/// Extracts plain text from an uploaded resume.
/// Blank output is an error: there is nothing for the agents to work with.
pub async fn extract_text(kind: DocumentKind, data: Bytes) -> Result<String, ExtractionError> {
    let text = match kind {
        DocumentKind::Pdf => pdf::extract_pdf_text(data).await?,
        DocumentKind::Docx => docx::extract_docx_text(&data)?,
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::EmptyText);
    }

    info!("Extracted {} chars from {:?} resume", text.len(), kind);
    Ok(text)
}
