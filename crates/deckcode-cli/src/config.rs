//! Command-line configuration.
//!
//! Options can be provided via:
//! - CLI arguments (`--to`, `--catalog`, etc.)
//! - Environment variables (`DECKCODE_TO`, `DECKCODE_CATALOG`, etc.)
//! - Default values
//!
//! # Example
//!
//! ```no_run
//! use deckcode_cli::CliConfig;
//!
//! let config = CliConfig::from_args();
//! config.validate().expect("Invalid configuration");
//! ```

use crate::error::ConfigError;
use clap::{Args, Parser, Subcommand, ValueEnum};
use deckcode_catalog::{Currency, PriceMode};
use deckcode_formats::{DeckFormat, ExportOptions, FormatVersion};
use std::path::PathBuf;

/// Input argument meaning "read standard input"
pub const STDIN_MARKER: &str = "-";

/// Top-level configuration loaded from CLI args and environment variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "deckcode",
    about = "Convert, inspect and resolve shareable deck codes",
    version
)]
pub struct CliConfig {
    /// Write output to this file instead of stdout
    #[arg(short, long, global = true, env = "DECKCODE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Re-encode a deck in another format
    Convert(ConvertArgs),
    /// Report the detected format and zone sizes of a deck
    Inspect(InspectArgs),
    /// Look deck cards up in a catalog and total their prices
    Resolve(ResolveArgs),
}

/// Output formats for `convert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetFormat {
    /// Compact URL-safe token
    Token,
    /// Plaintext YDK list
    Ydk,
    /// `ydke://` link
    Ydke,
    /// Deck as a JSON object of zones
    Json,
}

impl TargetFormat {
    /// Codec format, or `None` for JSON
    pub const fn deck_format(self) -> Option<DeckFormat> {
        match self {
            Self::Token => Some(DeckFormat::Token),
            Self::Ydk => Some(DeckFormat::Ydk),
            Self::Ydke => Some(DeckFormat::Ydke),
            Self::Json => None,
        }
    }
}

/// Arguments for `convert`.
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Deck input: `-` for stdin, a file path, or the deck code itself
    pub input: String,

    /// Output format
    #[arg(long, value_enum, env = "DECKCODE_TO", default_value = "token")]
    pub to: TargetFormat,

    /// Binary payload version for tokens (1 or 2)
    #[arg(long = "version", env = "DECKCODE_VERSION", default_value_t = 1)]
    pub format_version: u8,

    /// zlib compression level for tokens (0-9)
    #[arg(long, env = "DECKCODE_COMPRESSION_LEVEL", default_value_t = 9)]
    pub compression_level: u32,
}

impl ConvertArgs {
    /// Export options for the configured version and level.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedVersion` for an unknown version.
    pub fn export_options(&self) -> Result<ExportOptions, ConfigError> {
        let version = FormatVersion::from_byte(self.format_version)
            .ok_or(ConfigError::UnsupportedVersion(self.format_version))?;
        Ok(ExportOptions::default()
            .with_version(version)
            .with_compression_level(self.compression_level))
    }
}

/// Arguments for `inspect`.
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Deck input: `-` for stdin, a file path, or the deck code itself
    pub input: String,
}

/// Arguments for `resolve`.
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Deck input: `-` for stdin, a file path, or the deck code itself
    pub input: String,

    /// Path to the JSON card catalog
    #[arg(long, env = "DECKCODE_CATALOG")]
    pub catalog: PathBuf,

    /// Currency for price totals
    #[arg(long, env = "DECKCODE_CURRENCY", default_value = "dollar_us")]
    pub currency: Currency,

    /// How vendor prices collapse into one figure
    #[arg(long, env = "DECKCODE_PRICE_MODE", default_value = "average")]
    pub price_mode: PriceMode,

    /// Emit a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}

impl CliConfig {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Deck input argument of the selected subcommand.
    pub fn input(&self) -> &str {
        match &self.command {
            Command::Convert(args) => &args.input,
            Command::Inspect(args) => &args.input,
            Command::Resolve(args) => &args.input,
        }
    }

    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - The payload version is not 1 or 2
    /// - The compression level is above 9
    /// - The catalog file doesn't exist
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.command {
            Command::Convert(args) => {
                args.export_options()?;
                if args.compression_level > 9 {
                    return Err(ConfigError::InvalidCompressionLevel(args.compression_level));
                }
            }
            Command::Resolve(args) => {
                if !args.catalog.is_file() {
                    return Err(ConfigError::MissingCatalog(args.catalog.clone()));
                }
            }
            Command::Inspect(_) => {}
        }

        if self.input().trim().is_empty() {
            return Err(ConfigError::EmptyInput);
        }

        Ok(())
    }
}
