use crate::config::constants::{
    ANALYZE_TEMPERATURE, DEFAULT_MODEL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    FIX_TEMPERATURE, OPENAI_API_KEY_ENV, OPENAI_BASE_URL, OPENAI_PROVIDER,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_provider() -> String {
        OPENAI_PROVIDER.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_base_url() -> String {
        OPENAI_BASE_URL.to_string()
    }

    pub fn default_api_key_env() -> String {
        OPENAI_API_KEY_ENV.to_string()
    }

    pub fn default_analyze_temperature() -> f32 {
        ANALYZE_TEMPERATURE
    }

    pub fn default_fix_temperature() -> f32 {
        FIX_TEMPERATURE
    }
}
