use std::collections::{HashMap, HashSet};
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use super::task::{interpolate, Task};
use super::CrewError;
use crate::llm_client::prompts::{
    CONTEXT_HEADER, EXPECTED_OUTPUT_PREFIX, FINAL_ANSWER_INSTRUCTION,
};
use crate::llm_client::CompletionModel;

/// Raw output of a single completed task.
#[derive(Debug, Clone, Serialize)]
pub struct TaskOutput {
    pub name: String,
    pub agent_role: String,
    pub raw: String,
}

/// Outputs of every task in a kickoff, in execution order.
#[derive(Debug, Clone, Serialize)]
pub struct CrewOutput {
    pub tasks: Vec<TaskOutput>,
}

impl CrewOutput {
    pub fn task(&self, name: &str) -> Option<&TaskOutput> {
        self.tasks.iter().find(|t| t.name == name)
    }
}

/// An ordered set of tasks executed sequentially.
#[derive(Debug, Clone)]
pub struct Crew {
    tasks: Vec<Task>,
}

impl Crew {
    /// Validates task names and context references up front so a bad
    /// definition never reaches the model.
    pub fn new(tasks: Vec<Task>) -> Result<Self, CrewError> {
        if tasks.is_empty() {
            return Err(CrewError::Empty);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for task in &tasks {
            for ctx in &task.context {
                if !seen.contains(ctx.as_str()) {
                    return Err(CrewError::UnknownContext {
                        task: task.name.clone(),
                        context: ctx.clone(),
                    });
                }
            }
            if !seen.insert(task.name.as_str()) {
                return Err(CrewError::DuplicateTask(task.name.clone()));
            }
        }

        Ok(Self { tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Runs every task in order. The first failure aborts the run.
    pub async fn kickoff(
        &self,
        model: &dyn CompletionModel,
        inputs: &HashMap<String, String>,
    ) -> Result<CrewOutput, CrewError> {
        let mut outputs: Vec<TaskOutput> = Vec::with_capacity(self.tasks.len());

        for task in &self.tasks {
            let prompt = build_task_prompt(task, inputs, &outputs)?;
            let system = task.agent.system_prompt();

            info!("Running task '{}' as '{}'", task.name, task.agent.role);
            let started = Instant::now();

            let raw = model
                .complete(&system, &prompt)
                .await
                .map_err(|e| CrewError::Model {
                    task: task.name.clone(),
                    message: e.to_string(),
                })?;

            debug!(
                "Task '{}' finished in {}ms ({} chars)",
                task.name,
                started.elapsed().as_millis(),
                raw.len()
            );

            outputs.push(TaskOutput {
                name: task.name.clone(),
                agent_role: task.agent.role.clone(),
                raw,
            });
        }

        Ok(CrewOutput { tasks: outputs })
    }
}

fn build_task_prompt(
    task: &Task,
    inputs: &HashMap<String, String>,
    completed: &[TaskOutput],
) -> Result<String, CrewError> {
    let description = interpolate(&task.description, inputs, &task.name)?;
    let expected = interpolate(&task.expected_output, inputs, &task.name)?;

    let mut prompt = format!("{description}\n\n{EXPECTED_OUTPUT_PREFIX}{expected}");

    if !task.context.is_empty() {
        prompt.push_str("\n\n");
        prompt.push_str(CONTEXT_HEADER);
        for name in &task.context {
            // Crew::new guarantees context names refer to earlier tasks.
            if let Some(output) = completed.iter().find(|o| &o.name == name) {
                prompt.push_str(&format!("\n\n[{}]\n{}", output.name, output.raw.trim()));
            }
        }
    }

    prompt.push_str("\n\n");
    prompt.push_str(FINAL_ANSWER_INSTRUCTION);

    Ok(prompt)
}
