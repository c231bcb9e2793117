// Sequential agent pipeline: declarative agents and tasks run one after
// another against a single completion model, each task seeing the outputs of
// the tasks it names as context.

pub mod agent;
pub mod process;
pub mod task;

use thiserror::Error;

pub use agent::Agent;
pub use process::{Crew, CrewOutput, TaskOutput};
pub use task::Task;

#[derive(Debug, Error)]
pub enum CrewError {
    #[error("Crew has no tasks")]
    Empty,

    #[error("Duplicate task name '{0}'")]
    DuplicateTask(String),

    #[error("Task '{task}' uses '{context}' as context, but no earlier task has that name")]
    UnknownContext { task: String, context: String },

    #[error("Task '{task}' needs input '{input}', which was not provided")]
    MissingInput { task: String, input: String },

    #[error("Task '{task}' failed: {message}")]
    Model { task: String, message: String },
}
