//! Command-line front end for deckcode
//!
//! Converts deck codes between token, YDK, YDKE and JSON representations,
//! reports what a code contains, and resolves codes against a JSON card
//! catalog with price totals.
//!
//! The `deckcode` binary is a thin wrapper: it installs logging, parses
//! [`CliConfig`] and calls [`run`]. Everything else lives here so it can be
//! exercised without spawning a process.

#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
#![allow(clippy::must_use_candidate)] // Value-returning accessors
#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod input;

pub use commands::{execute, run};
pub use config::{CliConfig, Command, ConvertArgs, InspectArgs, ResolveArgs, TargetFormat};
pub use error::{CliError, ConfigError};
