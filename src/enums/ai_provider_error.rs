use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiProviderError {
    #[error("API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
}

impl AiProviderError {
    /// Maps a non-success completion API status onto the matching variant.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => Self::AuthenticationError(body),
            429 => Self::ApiError(format!("Rate limit exceeded: {}", body)),
            _ => Self::ApiError(format!("HTTP {}: {}", status, body)),
        }
    }
}
