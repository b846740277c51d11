use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{ErrorHandler, ReviewAgentError, ReviewAgentResult};
use crate::server::review_server::ReviewServer;
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::services::code_reviewer::CodeReviewer;
use crate::structs::cli::Cli;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, cli: Cli) -> ReviewAgentResult<()> {
        self.start_time = Some(Instant::now());
        let config_path = cli.config.as_deref();

        let result = match cli.command {
            Commands::Serve { host, port } => self.serve_command(config_path, host, port).await,
            Commands::Init => self.init_command(config_path),
            Commands::Validate => self.validate_command(config_path),
        };

        if let Err(e) = &result {
            ErrorHandler::handle_error(e);
        }

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    async fn serve_command(&self, config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> ReviewAgentResult<()> {
        let mut config = ConfigManager::load(config_path)?;
        Self::apply_overrides(&mut config, host, port);

        if let Err(errors) = ConfigManager::validate_config(&config) {
            ErrorHandler::handle_validation_errors(&errors);
            return Err(ReviewAgentError::config_error(
                "Configuration is invalid",
                None,
                Some("Run 'review-agent validate' for details"),
            ));
        }

        let api_key = ConfigManager::resolve_api_key_from_env(&config.ai)?;
        let provider = OpenAIProvider::from_config(&config.ai, api_key)?;
        log::info!("🤖 Using {} model {}", config.ai.provider, provider.model());

        let reviewer = Arc::new(CodeReviewer::from_config(Arc::new(provider), &config.ai));
        let mut server = ReviewServer::new(config.server.clone(), reviewer);
        server.start().await?;

        tokio::signal::ctrl_c().await?;
        server.shutdown().await
    }

    fn init_command(&self, config_path: Option<&Path>) -> ReviewAgentResult<()> {
        log::info!("🚀 Initializing review-agent configuration...");
        let path: PathBuf = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(ConfigManager::default_config_path);

        ConfigManager::create_sample_config(&path)?;
        log::info!("📝 Edit {} and set your API key, then run 'review-agent serve'.", path.display());
        Ok(())
    }

    fn validate_command(&self, config_path: Option<&Path>) -> ReviewAgentResult<()> {
        let config = ConfigManager::load(config_path)?;

        let mut errors = ConfigManager::validate_config(&config).err().unwrap_or_default();
        if let Err(e) = ConfigManager::resolve_api_key_from_env(&config.ai) {
            errors.push(e.user_message());
        }

        if errors.is_empty() {
            log::info!("✅ Configuration is valid");
            return Ok(());
        }

        ErrorHandler::handle_validation_errors(&errors);
        Err(ReviewAgentError::config_error("Configuration is invalid", None, None))
    }

    fn apply_overrides(config: &mut Config, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }
    }
}
