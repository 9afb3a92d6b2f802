//! Binary crate for the `weathercli` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Reading the API key from the environment
//! - Printing the summary produced by `weather-core`

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cmd = cli::Cli::parse();
    let api_key = std::env::var(cli::API_KEY_VAR).ok();
    cmd.run(api_key).await
}
