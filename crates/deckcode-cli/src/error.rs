//! Error types for the deckcode CLI.
//!
//! All errors use thiserror; the binary wraps them in `anyhow` at the top level.

use deckcode_catalog::CatalogError;
use deckcode_formats::{DecodingError, EncodingError};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Payload version other than 1 or 2
    #[error("Unsupported payload version {0}: expected 1 or 2")]
    UnsupportedVersion(u8),

    /// zlib level above 9
    #[error("Invalid compression level {0}: expected 0-9")]
    InvalidCompressionLevel(u32),

    /// Catalog path does not name a file
    #[error("Catalog file not found: {}", .0.display())]
    MissingCatalog(PathBuf),

    /// Deck input argument is blank
    #[error("Deck input is empty")]
    EmptyInput,
}

/// Command execution errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to read the deck input
    #[error("Failed to read input {source_name}: {source}")]
    InputFailed {
        /// Where the input came from ("stdin" or a path)
        source_name: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output file
    #[error("Failed to write output to {path}: {source}")]
    OutputFailed {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input is not a valid deck
    #[error("Invalid deck: {0}")]
    Decode(#[from] DecodingError),

    /// Deck cannot be written in the requested format
    #[error("Cannot export deck: {0}")]
    Encode(#[from] EncodingError),

    /// Catalog could not be loaded
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// JSON rendering failed
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
