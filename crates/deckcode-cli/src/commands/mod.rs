//! Subcommand handlers
//!
//! Each handler turns its arguments and the resolved deck text into the
//! complete output text; [`run`] takes care of input and output plumbing.

pub mod convert;
pub mod inspect;
pub mod resolve;

use crate::config::{CliConfig, Command};
use crate::error::{CliError, Result};
use crate::input::read_input;
use std::io::{Read, Write};

/// Run the configured subcommand and return its output text
///
/// # Errors
///
/// Returns `CliError` if the input cannot be read or the command fails.
pub fn execute<R: Read>(config: &CliConfig, stdin: R) -> Result<String> {
    let input = read_input(config.input(), stdin)?;
    let mut output = match &config.command {
        Command::Convert(args) => convert::handle(args, &input)?,
        Command::Inspect(_) => inspect::handle(&input)?,
        Command::Resolve(args) => resolve::handle(args, &input)?,
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

/// Validate `config`, run it against process stdin, and write the result
///
/// # Errors
///
/// Returns `CliError` on invalid configuration, command failure, or an
/// unwritable output destination.
pub fn run(config: &CliConfig) -> Result<()> {
    config.validate()?;
    let output = execute(config, std::io::stdin().lock())?;

    match &config.output {
        Some(path) => {
            std::fs::write(path, &output).map_err(|source| CliError::OutputFailed {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), bytes = output.len(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| CliError::OutputFailed {
                    path: "<stdout>".into(),
                    source,
                })?;
        }
    }
    Ok(())
}
