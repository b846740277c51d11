pub const ANALYZE_PERSONA: &str = "code reviewer";

pub const ANALYZE_INSTRUCTION: &str =
    "Analyze the following code for bugs, issues, improvements, and design suggestions.";

pub const FIX_PERSONA: &str = "developer";

pub const FIX_INSTRUCTION: &str =
    "Fix the following code and return ONLY the corrected version, no explanation.";

