use std::fmt;
use crate::constants::prompts::{ANALYZE_INSTRUCTION, ANALYZE_PERSONA, FIX_INSTRUCTION, FIX_PERSONA};

/// The two things the service can ask the model to do with a piece of code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTask {
    Analyze,
    Fix,
}

impl ReviewTask {
    pub fn persona(&self) -> &'static str {
        match self {
            Self::Analyze => ANALYZE_PERSONA,
            Self::Fix => FIX_PERSONA,
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Analyze => ANALYZE_INSTRUCTION,
            Self::Fix => FIX_INSTRUCTION,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Analyze => "analyze",
            Self::Fix => "fix",
        }
    }
}

impl fmt::Display for ReviewTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
