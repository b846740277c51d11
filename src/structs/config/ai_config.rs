use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_provider")]
    pub provider: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    #[serde(default = "ConfigHelper::default_analyze_temperature")]
    pub analyze_temperature: f32,

    #[serde(default = "ConfigHelper::default_fix_temperature")]
    pub fix_temperature: f32,

    #[serde(default)]
    pub max_tokens: Option<u32>,

    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ConfigHelper::default_provider(),
            model: ConfigHelper::default_model(),
            base_url: ConfigHelper::default_base_url(),
            api_key_env: ConfigHelper::default_api_key_env(),
            api_key: None,
            analyze_temperature: ConfigHelper::default_analyze_temperature(),
            fix_temperature: ConfigHelper::default_fix_temperature(),
            max_tokens: None,
            request_timeout_secs: None,
        }
    }
}
