pub mod ai_providers;
pub mod code_reviewer;
