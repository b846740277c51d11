/// A single-prompt completion request, independent of any provider's wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub prompt: String,
    pub temperature: f32,
}

impl ChatRequest {
    pub fn new(prompt: String, temperature: f32) -> Self {
        Self { prompt, temperature }
    }
}
