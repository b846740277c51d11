use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_TEMPERATURE, OPENAI_PROVIDER};
use crate::errors::{ReviewAgentError, ReviewAgentResult};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::config::Config;

pub const SAMPLE_CONFIG: &str = r#"# Review Agent configuration

[server]
# Interface and port the HTTP server binds to
host = "0.0.0.0"
port = 8000

[ai]
# Completion provider; only "openai" is supported
provider = "openai"
model = "gpt-4o-mini"
base_url = "https://api.openai.com/v1"

# Environment variable holding the API key (a .env file is loaded at startup)
api_key_env = "OPENAI_API_KEY"
# Inline key, used only when the environment variable is unset
# api_key = "sk-..."

analyze_temperature = 0.2
fix_temperature = 0.1

# Optional completion length cap and client timeout
# max_tokens = 2048
# request_timeout_secs = 60
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads `explicit_path` if given (it must exist), otherwise the default location, falling back
    /// to built-in defaults when no file is there.
    pub fn load(explicit_path: Option<&Path>) -> ReviewAgentResult<Config> {
        match explicit_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ReviewAgentError::config_file_error(
                        &path.display().to_string(),
                        "file does not exist",
                    ));
                }
                Self::load_from(path)
            }
            None => {
                let path = Self::default_config_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    log::debug!("No config file at {}, using defaults", path.display());
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> ReviewAgentResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| ReviewAgentError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> ReviewAgentResult<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn create_sample_config(path: &Path) -> ReviewAgentResult<()> {
        if path.exists() {
            return Err(ReviewAgentError::config_file_error(
                &path.display().to_string(),
                "file already exists, refusing to overwrite",
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    /// Resolves the API key from the environment variable named in `api_key_env`, falling back to
    /// the inline `api_key`. Blank values count as missing.
    pub fn resolve_api_key<F>(config: &AiConfig, lookup_env: F) -> ReviewAgentResult<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup_env(&config.api_key_env)
            .or_else(|| config.api_key.clone())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ReviewAgentError::config_error(
                    "No API key configured for the completion provider",
                    Some("ai.api_key"),
                    Some(format!("Set the {} environment variable or ai.api_key in the config file", config.api_key_env).as_str()),
                )
            })
    }

    pub fn resolve_api_key_from_env(config: &AiConfig) -> ReviewAgentResult<String> {
        Self::resolve_api_key(config, |name| std::env::var(name).ok())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.host.parse::<IpAddr>().is_err() {
            errors.push(format!("server.host '{}' is not a valid IP address", config.server.host));
        }

        if config.ai.provider != OPENAI_PROVIDER {
            errors.push(format!("ai.provider '{}' is not supported (expected '{}')", config.ai.provider, OPENAI_PROVIDER));
        }

        if config.ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }

        if !(config.ai.base_url.starts_with("http://") || config.ai.base_url.starts_with("https://")) {
            errors.push(format!("ai.base_url '{}' must start with http:// or https://", config.ai.base_url));
        }

        for (field, value) in [
            ("ai.analyze_temperature", config.ai.analyze_temperature),
            ("ai.fix_temperature", config.ai.fix_temperature),
        ] {
            if !(0.0..=MAX_TEMPERATURE).contains(&value) {
                errors.push(format!("{} must be between 0 and {}, got {}", field, MAX_TEMPERATURE, value));
            }
        }

        if config.ai.max_tokens == Some(0) {
            errors.push("ai.max_tokens must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
