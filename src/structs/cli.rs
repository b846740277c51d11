use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "review-agent")]
#[clap(about = "AI code review and auto-fix HTTP service", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
