//! The resume crew: feedback → rewrite → job guidance.

pub mod feedback;
pub mod prompts;

use std::collections::HashMap;

use crate::crew::{Agent, Crew, CrewError, Task};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use prompts::*;

pub const RESUME_INPUT: &str = "resume";

pub const FEEDBACK_TASK_NAME: &str = "resume_feedback";
pub const REWRITE_TASK_NAME: &str = "resume_rewrite";
pub const GUIDANCE_TASK_NAME: &str = "job_guidance";

/// Builds the three-agent crew. Each task feeds the next.
pub fn build_resume_crew() -> Result<Crew, CrewError> {
    let advisor = Agent::new(FEEDBACK_ROLE, FEEDBACK_GOAL, FEEDBACK_BACKSTORY);
    let rewriter = Agent::new(REWRITE_ROLE, REWRITE_GOAL, REWRITE_BACKSTORY);
    let researcher = Agent::new(GUIDANCE_ROLE, GUIDANCE_GOAL, GUIDANCE_BACKSTORY);

    Crew::new(vec![
        Task::new(
            FEEDBACK_TASK_NAME,
            format!("{FEEDBACK_TASK}\n{JSON_ONLY_INSTRUCTION}"),
            FEEDBACK_EXPECTED,
            advisor,
        ),
        Task::new(REWRITE_TASK_NAME, REWRITE_TASK, REWRITE_EXPECTED, rewriter)
            .with_context([FEEDBACK_TASK_NAME]),
        Task::new(GUIDANCE_TASK_NAME, GUIDANCE_TASK, GUIDANCE_EXPECTED, researcher)
            .with_context([REWRITE_TASK_NAME]),
    ])
}

/// Kickoff inputs for a resume.
pub fn resume_inputs(resume_text: &str) -> HashMap<String, String> {
    HashMap::from([(RESUME_INPUT.to_string(), resume_text.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crew_has_three_tasks_in_order() {
        let crew = build_resume_crew().unwrap();
        let names: Vec<&str> = crew.tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![FEEDBACK_TASK_NAME, REWRITE_TASK_NAME, GUIDANCE_TASK_NAME]
        );
    }

    #[test]
    fn test_context_chain() {
        let crew = build_resume_crew().unwrap();
        let tasks = crew.tasks();
        assert!(tasks[0].context.is_empty());
        assert_eq!(tasks[1].context, vec![FEEDBACK_TASK_NAME.to_string()]);
        assert_eq!(tasks[2].context, vec![REWRITE_TASK_NAME.to_string()]);
    }

    #[test]
    fn test_feedback_task_asks_for_json_fields() {
        let crew = build_resume_crew().unwrap();
        let description = &crew.tasks()[0].description;
        for field in [
            "sections_detected",
            "missing_sections",
            "well_written_sections",
            "quality_score",
            "suggestions",
        ] {
            assert!(description.contains(field), "missing field {field}");
        }
        assert!(description.contains("{resume}"));
        assert!(description.ends_with(JSON_ONLY_INSTRUCTION));
    }

    #[test]
    fn test_resume_inputs_key() {
        let inputs = resume_inputs("text");
        assert_eq!(inputs.get(RESUME_INPUT).map(String::as_str), Some("text"));
    }
}
