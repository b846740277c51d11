use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self {
            status: "running".to_string(),
        }
    }
}
