use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OpenAIResponse {
    #[serde(default)]
    pub choices: Vec<OpenAIChoice>,
    #[serde(default)]
    pub usage: Option<OpenAIUsage>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OpenAIChoice {
    pub message: OpenAIResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Assistant message in a completion reply; `content` is null for refusals and tool calls.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OpenAIResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct OpenAIUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl OpenAIResponse {
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}
