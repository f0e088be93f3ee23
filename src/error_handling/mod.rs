//! Error handling.
//!
//! This module provides the error types for the layers surrounding the
//! analysis engine. The engine itself never returns an error: a malformed
//! structured-data block is skipped, malformed markup is repaired by the
//! parser, and anything missing becomes a finding.

mod types;

// Re-export public API
pub use types::{InitializationError, InputError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_input_error_read_display() {
        let err = InputError::Read {
            path: PathBuf::from("page.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let message = err.to_string();
        assert!(message.contains("page.html"));
        assert!(message.contains("no such file"));
    }

    #[test]
    fn test_input_error_invalid_config_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = InputError::InvalidConfig {
            path: PathBuf::from("config.json"),
            source,
        };
        assert!(err.to_string().starts_with("Invalid configuration in config.json"));
    }
}
