//! deckcode binary entry point.
//!
//! This is a thin wrapper around the deckcode-cli library that:
//! 1. Initializes logging
//! 2. Parses command-line arguments
//! 3. Validates configuration and runs the selected subcommand
//!
//! Logs go to stderr so stdout carries only command output.

use anyhow::{Context, Result};
use deckcode_cli::CliConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_args();
    tracing::debug!(?config, "configuration loaded");

    deckcode_cli::run(&config).context("deckcode failed")?;

    Ok(())
}
