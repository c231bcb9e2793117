//! Interpretation of the feedback agent's output.
//!
//! The agent is asked for a JSON object but nothing guarantees it. Parse
//! failures are not request failures: the raw text and the parse error are
//! returned so the caller can still show something useful.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::llm_client::strip_json_fences;

/// Typed view of the feedback object. Every field is optional so a partially
/// conforming answer still yields a summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeFeedback {
    pub sections_detected: Vec<String>,
    pub missing_sections: Vec<String>,
    pub well_written_sections: Vec<String>,
    pub quality_score: Option<f64>,
    pub suggestions: Vec<String>,
}

/// Headline numbers shown above the feedback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackMetrics {
    pub quality_score: Option<f64>,
    /// `"<score>/100"`, or `"N/A/100"` when the model gave no score.
    pub quality_score_display: String,
    pub sections_detected: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FeedbackOutcome {
    Parsed {
        data: Value,
        /// `None` when the object's fields have unexpected types.
        summary: Option<ResumeFeedback>,
        metrics: FeedbackMetrics,
    },
    Unparsed {
        raw: String,
        error: String,
    },
}

pub fn interpret_feedback(raw: &str) -> FeedbackOutcome {
    let cleaned = strip_json_fences(raw);

    let data: Value = match serde_json::from_str(cleaned) {
        Ok(v) => v,
        Err(e) => {
            warn!("Feedback is not valid JSON: {e}");
            return FeedbackOutcome::Unparsed {
                raw: raw.to_string(),
                error: e.to_string(),
            };
        }
    };

    if !data.is_object() {
        warn!("Feedback JSON is not an object");
        return FeedbackOutcome::Unparsed {
            raw: raw.to_string(),
            error: format!("expected a JSON object, got {}", json_kind(&data)),
        };
    }

    let metrics = compute_metrics(&data);
    let summary = serde_json::from_value::<ResumeFeedback>(data.clone()).ok();

    FeedbackOutcome::Parsed {
        data,
        summary,
        metrics,
    }
}

fn compute_metrics(data: &Value) -> FeedbackMetrics {
    let score = data.get("quality_score");

    let quality_score = score.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    });

    let display = match score {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => "N/A".to_string(),
    };

    let sections_detected = data
        .get("sections_detected")
        .and_then(Value::as_array)
        .map(Vec::len)
        .unwrap_or(0);

    FeedbackMetrics {
        quality_score,
        quality_score_display: format!("{display}/100"),
        sections_detected,
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = r#"{
        "sections_detected": ["Summary", "Experience", "Education"],
        "missing_sections": ["Projects"],
        "well_written_sections": ["Experience"],
        "quality_score": 72,
        "suggestions": ["Quantify achievements"]
    }"#;

    #[test]
    fn test_parses_plain_json() {
        match interpret_feedback(GOOD) {
            FeedbackOutcome::Parsed {
                summary, metrics, ..
            } => {
                let summary = summary.expect("typed summary");
                assert_eq!(summary.missing_sections, vec!["Projects".to_string()]);
                assert_eq!(metrics.quality_score, Some(72.0));
                assert_eq!(metrics.quality_score_display, "72/100");
                assert_eq!(metrics.sections_detected, 3);
            }
            other => panic!("expected Parsed, got {other:?}"),
        }
    }

    #[test]
    fn test_parses_fenced_json() {
        let fenced = format!("```json\n{GOOD}\n```");
        assert!(matches!(
            interpret_feedback(&fenced),
            FeedbackOutcome::Parsed { .. }
        ));
    }

    #[test]
    fn test_missing_score_displays_na() {
        match interpret_feedback(r#"{"suggestions": []}"#) {
            FeedbackOutcome::Parsed { metrics, .. } => {
                assert_eq!(metrics.quality_score, None);
                assert_eq!(metrics.quality_score_display, "N/A/100");
                assert_eq!(metrics.sections_detected, 0);
            }
            other => panic!("expected Parsed, got {other:?}"),
        }
    }

    #[test]
    fn test_wrongly_typed_fields_keep_data_but_drop_summary() {
        let raw = r#"{"sections_detected": "Experience", "quality_score": "80"}"#;
        match interpret_feedback(raw) {
            FeedbackOutcome::Parsed {
                data,
                summary,
                metrics,
            } => {
                assert!(summary.is_none());
                assert_eq!(data["sections_detected"], "Experience");
                assert_eq!(metrics.quality_score, Some(80.0));
                assert_eq!(metrics.quality_score_display, "80/100");
                assert_eq!(metrics.sections_detected, 0);
            }
            other => panic!("expected Parsed, got {other:?}"),
        }
    }

    #[test]
    fn test_prose_is_unparsed_with_raw_preserved() {
        let raw = "Here is my analysis: the resume is solid.";
        match interpret_feedback(raw) {
            FeedbackOutcome::Unparsed { raw: kept, error } => {
                assert_eq!(kept, raw);
                assert!(!error.is_empty());
            }
            other => panic!("expected Unparsed, got {other:?}"),
        }
    }

    #[test]
    fn test_array_is_unparsed() {
        match interpret_feedback("[1, 2, 3]") {
            FeedbackOutcome::Unparsed { error, .. } => {
                assert_eq!(error, "expected a JSON object, got an array");
            }
            other => panic!("expected Unparsed, got {other:?}"),
        }
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(interpret_feedback("nope")).unwrap();
        assert_eq!(json["status"], "unparsed");
        assert_eq!(json["raw"], "nope");
    }
}
