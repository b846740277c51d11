use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::chat_request::ChatRequest;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Sends one prompt and returns the text of the first completion, unmodified.
    async fn chat(&self, request: ChatRequest) -> Result<String, AiProviderError>;
}
