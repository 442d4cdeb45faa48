//! Error types for catalog loading and lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog-related errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to open or read a catalog file
    #[error("Failed to load catalog from {path}: {source}")]
    LoadFailed {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid JSON in catalog data
    #[error("Invalid JSON in catalog: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Currency identifier not in the known set
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Price mode identifier not in the known set
    #[error("Unknown price mode: {0}")]
    UnknownPriceMode(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
