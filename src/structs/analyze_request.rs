use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AnalyzeRequest {
    pub language: String,
    pub code: String,
}
