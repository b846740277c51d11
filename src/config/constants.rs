use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8000;

pub const CONFIG_DIR_NAME: &str = "review-agent";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENAI_PROVIDER: &str = "openai";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub const ANALYZE_TEMPERATURE: f32 = 0.2;
pub const FIX_TEMPERATURE: f32 = 0.1;
pub const MAX_TEMPERATURE: f32 = 2.0;

pub const ACCESS_LOG_TARGET: &str = "review_agent::access";

pub const CORS_ALLOWED_METHODS: &[&str] = &["GET", "POST", "OPTIONS"];
pub const CORS_ANY: &str = "*";
pub const CORS_MAX_AGE_SECS: u64 = 600;

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
