//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use uuid::Uuid;

use crate::analysis::pipeline::{analyze_resume, AnalysisReport};
use crate::errors::AppError;
use crate::render::docx::DOCX_MIME;
use crate::render::store::IMPROVED_RESUME_FILE;
use crate::state::AppState;

/// Multipart field carrying the uploaded resume.
pub const RESUME_FIELD: &str = "resume";

/// POST /api/v1/analyze
///
/// Multipart upload with a `resume` file field (PDF or DOCX). Runs the three
/// agents and returns feedback, the rewrite and job guidance.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let (file_name, data) = read_resume_field(&mut multipart).await?;

    let report = analyze_resume(
        state.llm.as_ref(),
        &state.crew,
        &state.store,
        &file_name,
        data,
    )
    .await?;

    Ok(Json(report))
}

/// GET /api/v1/analyses/:id/improved_resume.docx
pub async fn handle_download(
    State(state): State<AppState>,
    Path(analysis_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let data = state.store.load(analysis_id).await?;

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{IMPROVED_RESUME_FILE}\""),
            ),
        ],
        data,
    ))
}

async fn read_resume_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Uploaded resume has no file name".to_string()))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        if data.is_empty() {
            return Err(AppError::Validation("Uploaded resume is empty".to_string()));
        }

        return Ok((file_name, data));
    }

    Err(AppError::Validation(format!(
        "Missing '{RESUME_FIELD}' file field. Upload Resume (PDF or DOCX)."
    )))
}
