use std::process::ExitCode;
use clap::Parser;
use review_agent::structs::cli::Cli;
use review_agent::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match CommandRunner::new().run_command(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
