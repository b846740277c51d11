use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct FixRequest {
    pub language: String,
    pub code: String,
}
