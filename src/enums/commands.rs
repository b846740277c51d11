use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long, env = "PORT")]
        port: Option<u16>,
    },
    /// Write a sample configuration file
    Init,
    /// Check the configuration and API key without starting the server
    Validate,
}
