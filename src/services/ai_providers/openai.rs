use async_trait::async_trait;
use reqwest::Client;

use crate::config::constants::{timeout_duration_secs, DEFAULT_MODEL, OPENAI_BASE_URL};
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::ReviewAgentResult;
use crate::structs::ai::chat_request::ChatRequest;
use crate::structs::ai::openai::openai_message::OpenAIMessage;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::ai::openai::openai_response::OpenAIResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct OpenAIProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: Option<u32>,
}

impl OpenAIProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
            client: Client::new(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: None,
        }
    }

    /// Builds the provider from `[ai]` settings. The client is created once here and reused for
    /// every request.
    pub fn from_config(config: &AiConfig, api_key: String) -> ReviewAgentResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(timeout_duration_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self::new(api_key)
            .with_client(client)
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone())
            .with_max_tokens(config.max_tokens))
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn get_request(&self, request: ChatRequest) -> OpenAIRequest {
        OpenAIRequest {
            model: self.model.clone(),
            messages: vec![OpenAIMessage::user(request.prompt)],
            temperature: request.temperature,
            max_tokens: self.max_tokens,
        }
    }

    async fn make_request(&self, url: String, request_body: &OpenAIRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {} (temperature {})", request_body.model, request_body.temperature);

        self.client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }

    pub async fn get_non_streaming_response(&self, request: ChatRequest) -> Result<String, AiProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(request);

        let response = self.make_request(url, &request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::warn!("❌ OpenAI API error response ({}): {}", status, error_text);
            return Err(AiProviderError::from_status(status.as_u16(), error_text));
        }

        let parsed: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        if let Some(usage) = parsed.usage {
            log::debug!(
                "🔢 Tokens used: {} prompt + {} completion = {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        parsed
            .first_content()
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))
    }
}

#[async_trait]
impl AiProvider for OpenAIProvider {
    async fn chat(&self, request: ChatRequest) -> Result<String, AiProviderError> {
        self.get_non_streaming_response(request).await
    }
}
