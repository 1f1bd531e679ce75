//! Binary crate for the `city-info` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive prompts and configuration
//! - Human-friendly output

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Must run before parsing: clap reads OPENWEATHER_API_KEY from the environment.
    cli::load_env_file(Path::new(".env"));

    let cmd = cli::Cli::parse();
    cmd.run().await
}
