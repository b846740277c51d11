use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AnalyzeResponse {
    pub analysis: String,
}
