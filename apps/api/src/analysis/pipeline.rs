//! Analysis pipeline — sequences the calls behind one Analyze click.
//!
//! Flow: detect kind → extract text → crew kickoff (feedback → rewrite →
//!       guidance) → interpret feedback → render DOCX → save → report.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::advisor::feedback::{interpret_feedback, FeedbackOutcome};
use crate::advisor::{resume_inputs, FEEDBACK_TASK_NAME, GUIDANCE_TASK_NAME, REWRITE_TASK_NAME};
use crate::crew::{Crew, CrewOutput};
use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentKind};
use crate::llm_client::CompletionModel;
use crate::render::docx::render_docx;
use crate::render::store::{ImprovedResumeStore, IMPROVED_RESUME_FILE};

/// Everything the UI shows after an analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub file_name: String,
    pub document_kind: DocumentKind,
    pub extracted_chars: usize,
    pub feedback: FeedbackOutcome,
    pub improved_resume: String,
    pub job_guidance: String,
    pub download_url: String,
    pub created_at: DateTime<Utc>,
}

pub fn download_url(analysis_id: Uuid) -> String {
    format!("/api/v1/analyses/{analysis_id}/{IMPROVED_RESUME_FILE}")
}

pub async fn analyze_resume(
    model: &dyn CompletionModel,
    crew: &Crew,
    store: &ImprovedResumeStore,
    file_name: &str,
    data: Bytes,
) -> Result<AnalysisReport, AppError> {
    let document_kind = DocumentKind::from_file_name(file_name)?;

    info!("Extracting text from '{}' ({} bytes)", file_name, data.len());
    let resume_text = extract_text(document_kind, data).await?;

    let output = crew.kickoff(model, &resume_inputs(&resume_text)).await?;

    let feedback = interpret_feedback(task_raw(&output, FEEDBACK_TASK_NAME)?);
    let improved_resume = task_raw(&output, REWRITE_TASK_NAME)?.trim().to_string();
    let job_guidance = task_raw(&output, GUIDANCE_TASK_NAME)?.trim().to_string();

    let analysis_id = Uuid::new_v4();
    let docx = render_docx(&improved_resume)?;
    store.save(analysis_id, docx).await?;

    info!(
        "Analysis {} complete (feedback parsed: {})",
        analysis_id,
        matches!(feedback, FeedbackOutcome::Parsed { .. })
    );

    Ok(AnalysisReport {
        analysis_id,
        file_name: file_name.to_string(),
        document_kind,
        extracted_chars: resume_text.chars().count(),
        feedback,
        improved_resume,
        job_guidance,
        download_url: download_url(analysis_id),
        created_at: Utc::now(),
    })
}

fn task_raw<'a>(output: &'a CrewOutput, name: &str) -> Result<&'a str, AppError> {
    output
        .task(name)
        .map(|t| t.raw.as_str())
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Crew produced no output for '{name}'")))
}
