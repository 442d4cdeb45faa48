//! Deck input resolution
//!
//! A deck argument is read from stdin when it is `-`, from a file when it
//! names an existing file, and is otherwise taken literally as the deck code.

use crate::config::STDIN_MARKER;
use crate::error::{CliError, Result};
use std::io::Read;
use std::path::Path;

/// Resolve `arg` to deck text, reading `stdin` only when `arg` is `-`
///
/// # Errors
///
/// Returns `CliError::InputFailed` if stdin or the file cannot be read.
pub fn read_input<R: Read>(arg: &str, mut stdin: R) -> Result<String> {
    if arg == STDIN_MARKER {
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .map_err(|source| CliError::InputFailed {
                source_name: "stdin".to_string(),
                source,
            })?;
        tracing::debug!(bytes = text.len(), "read deck from stdin");
        return Ok(text);
    }

    let path = Path::new(arg);
    if path.is_file() {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::InputFailed {
            source_name: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read deck from file");
        return Ok(text);
    }

    Ok(arg.to_string())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_stdin_marker() {
        let text = read_input("-", "#main\n1\n".as_bytes()).unwrap();
        assert_eq!(text, "#main\n1\n");
    }

    #[test]
    fn test_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"ydke://!!!").unwrap();
        let arg = file.path().to_str().unwrap();
        assert_eq!(read_input(arg, std::io::empty()).unwrap(), "ydke://!!!");
    }

    #[test]
    fn test_literal_code() {
        assert_eq!(read_input("AQIDBA", std::io::empty()).unwrap(), "AQIDBA");
    }

    #[test]
    fn test_invalid_utf8_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, 0x00]).unwrap();
        let arg = file.path().to_str().unwrap();
        assert!(matches!(
            read_input(arg, std::io::empty()),
            Err(CliError::InputFailed { .. })
        ));
    }
}
