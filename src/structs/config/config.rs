use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::server_config::ServerConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ai: AiConfig,
}
