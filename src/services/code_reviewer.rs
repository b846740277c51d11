use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::enums::ai_provider_error::AiProviderError;
use crate::enums::review_task::ReviewTask;
use crate::helpers::prompt_generator;
use crate::structs::ai::chat_request::ChatRequest;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

/// Builds review and fix prompts and forwards them to the shared completion provider.
pub struct CodeReviewer {
    ai_provider: Arc<dyn AiProvider>,
    analyze_temperature: f32,
    fix_temperature: f32,
}

impl CodeReviewer {
    pub fn new(ai_provider: Arc<dyn AiProvider>, analyze_temperature: f32, fix_temperature: f32) -> Self {
        Self {
            ai_provider,
            analyze_temperature,
            fix_temperature,
        }
    }

    pub fn from_config(ai_provider: Arc<dyn AiProvider>, config: &AiConfig) -> Self {
        Self::new(ai_provider, config.analyze_temperature, config.fix_temperature)
    }

    pub fn temperature(&self, task: ReviewTask) -> f32 {
        match task {
            ReviewTask::Analyze => self.analyze_temperature,
            ReviewTask::Fix => self.fix_temperature,
        }
    }

    pub async fn analyze(&self, language: &str, code: &str) -> Result<String, AiProviderError> {
        self.run(ReviewTask::Analyze, language, code).await
    }

    pub async fn fix(&self, language: &str, code: &str) -> Result<String, AiProviderError> {
        self.run(ReviewTask::Fix, language, code).await
    }

    pub async fn run(&self, task: ReviewTask, language: &str, code: &str) -> Result<String, AiProviderError> {
        let request_id = Uuid::new_v4();
        let started = Instant::now();
        log::info!("🔍 [{}] {} request: language={} code_len={}", request_id, task, language, code.len());

        let prompt = prompt_generator::generate_prompt(task, language, code);
        let request = ChatRequest::new(prompt, self.temperature(task));

        match self.ai_provider.chat(request).await {
            Ok(text) => {
                log::info!(
                    "✅ [{}] {} completed in {}ms, reply_len={}",
                    request_id,
                    task,
                    started.elapsed().as_millis(),
                    text.len()
                );
                Ok(text)
            }
            Err(e) => {
                log::warn!("❌ [{}] {} failed after {}ms: {}", request_id, task, started.elapsed().as_millis(), e);
                Err(e)
            }
        }
    }
}
