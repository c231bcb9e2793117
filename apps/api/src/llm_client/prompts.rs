// Shared prompt fragments.
// Each agent's own prompts live in advisor/prompts.rs; this file holds the
// cross-cutting pieces the crew stitches around every task.

/// Appended to JSON-producing task descriptions.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY the JSON object, no other text or explanation.";

/// Lead-in for the expected output of a task.
pub const EXPECTED_OUTPUT_PREFIX: &str = "This is the expected criteria for your final answer: ";

/// Header placed before outputs of the tasks a task depends on.
pub const CONTEXT_HEADER: &str =
    "This is the context you're working with (outputs of the previous tasks):";

/// Closing instruction so the agent answers directly instead of narrating.
pub const FINAL_ANSWER_INSTRUCTION: &str =
    "Begin! Give your complete final answer directly; do not describe your process.";
