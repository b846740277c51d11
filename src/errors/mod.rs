use thiserror::Error;
use crate::enums::ai_provider_error::AiProviderError;

#[derive(Debug, Error)]
pub enum ReviewAgentError {
    #[error("Configuration Error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },

    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    #[error(transparent)]
    ProviderError(#[from] AiProviderError),

    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl ReviewAgentError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::ProviderError(error) => {
                format!("{}\n💡 Check your API key and network connection", error)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }
}

/// Result type alias for review-agent operations
pub type ReviewAgentResult<T> = Result<T, ReviewAgentError>;

pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &ReviewAgentError) {
        log::debug!("{:?}", error);
        eprintln!("❌ {}", error.user_message());
    }

    pub fn handle_validation_errors(errors: &[String]) {
        eprintln!("❌ Configuration has {} problem(s):", errors.len());
        for (i, error) in errors.iter().enumerate() {
            eprintln!("  {}. {}", i + 1, error);
        }
    }
}

impl From<std::io::Error> for ReviewAgentError {
    fn from(error: std::io::Error) -> Self {
        ReviewAgentError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for ReviewAgentError {
    fn from(error: toml::de::Error) -> Self {
        ReviewAgentError::ConfigurationError {
            message: error.message().to_string(),
            field: None,
            suggestion: Some("Run 'review-agent init' to see a valid sample configuration".to_string()),
        }
    }
}

impl From<reqwest::Error> for ReviewAgentError {
    fn from(error: reqwest::Error) -> Self {
        ReviewAgentError::ProviderError(AiProviderError::NetworkError(error.to_string()))
    }
}
