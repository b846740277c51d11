use crate::enums::review_task::ReviewTask;

/// Builds the single user message sent to the model. `code` is embedded verbatim.
pub fn generate_prompt(task: ReviewTask, language: &str, code: &str) -> String {
    format!(
        "You are an expert {} {}.\n{}\nCode:\n{}\n",
        language,
        task.persona(),
        task.instruction(),
        code
    )
}
