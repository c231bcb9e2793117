use bytes::Bytes;

use super::ExtractionError;

/// Extracts text from PDF bytes.
///
/// `pdf-extract` is synchronous and can panic on malformed input, so it runs
/// on the blocking pool and a panic is reported as a parse error.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, ExtractionError> {
    let joined = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&data).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| {
        if e.is_panic() {
            ExtractionError::Pdf("the PDF parser could not read this file".to_string())
        } else {
            ExtractionError::Pdf(e.to_string())
        }
    })?;

    joined.map_err(ExtractionError::Pdf)
}
