use std::collections::HashMap;

use super::agent::Agent;
use super::CrewError;

/// A unit of work assigned to an agent.
///
/// `description` may reference kickoff inputs as `{name}` placeholders.
/// `context` names earlier tasks whose outputs are handed to this one.
#[derive(Debug, Clone)]
pub struct Task {
    pub name: String,
    pub description: String,
    pub expected_output: String,
    pub agent: Agent,
    pub context: Vec<String>,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        expected_output: impl Into<String>,
        agent: Agent,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            expected_output: expected_output.into(),
            agent,
            context: Vec::new(),
        }
    }

    pub fn with_context<I, S>(mut self, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context = tasks.into_iter().map(Into::into).collect();
        self
    }
}

/// Replaces `{identifier}` placeholders with values from `inputs`.
///
/// Braces that do not wrap a plain identifier (JSON examples, stray `{`) are
/// copied through untouched. Substituted values are not rescanned, so input
/// text containing braces is safe.
pub fn interpolate(
    template: &str,
    inputs: &HashMap<String, String>,
    task: &str,
) -> Result<String, CrewError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) if is_identifier(&after[..close]) => {
                let key = &after[..close];
                let value = inputs.get(key).ok_or_else(|| CrewError::MissingInput {
                    task: task.to_string(),
                    input: key.to_string(),
                })?;
                out.push_str(value);
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    Ok(out)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_interpolate_replaces_placeholders() {
        let out = interpolate(
            "Resume:\n{resume}\nCity: {city}",
            &inputs(&[("resume", "Jane Doe"), ("city", "Pune")]),
            "t",
        )
        .unwrap();
        assert_eq!(out, "Resume:\nJane Doe\nCity: Pune");
    }

    #[test]
    fn test_interpolate_missing_input_errors() {
        let err = interpolate("Resume: {resume}", &inputs(&[]), "resume_feedback").unwrap_err();
        match err {
            CrewError::MissingInput { task, input } => {
                assert_eq!(task, "resume_feedback");
                assert_eq!(input, "resume");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_interpolate_leaves_non_identifier_braces() {
        let out = interpolate(
            r#"Return {"score": 1} for {name}"#,
            &inputs(&[("name", "x")]),
            "t",
        )
        .unwrap();
        assert_eq!(out, r#"Return {"score": 1} for x"#);
    }

    #[test]
    fn test_interpolate_does_not_rescan_values() {
        let out = interpolate("{a}", &inputs(&[("a", "{b}")]), "t").unwrap();
        assert_eq!(out, "{b}");
    }

    #[test]
    fn test_interpolate_unclosed_brace() {
        let out = interpolate("open { never closed", &inputs(&[]), "t").unwrap();
        assert_eq!(out, "open { never closed");
    }
}
