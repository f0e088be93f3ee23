//! Scan input reading.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error_handling::InputError;

/// Path value that selects stdin.
pub const STDIN_PATH: &str = "-";

/// Reads one scan input.
///
/// `None` yields an empty string (an absent document is a valid input), `-`
/// reads stdin, anything else is read as a UTF-8 file.
pub fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    let Some(path) = path else {
        return Ok(String::new());
    };

    if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| InputError::Read {
                path: PathBuf::from(STDIN_PATH),
                source,
            })?;
        log::debug!("Read {} byte(s) from stdin", text.len());
        return Ok(text);
    }

    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} byte(s) from {}", text.len(), path.display());
    Ok(text)
}
