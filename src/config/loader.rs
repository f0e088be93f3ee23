//! Configuration snapshot loading.
//!
//! Reads a JSON configuration snapshot from disk. The snapshot is read-only:
//! nothing here ever writes configuration back.

use std::fs;
use std::path::Path;

use crate::config::ScanConfig;
use crate::error_handling::InputError;

/// Loads a scan configuration snapshot from a JSON file.
///
/// Missing sections fall back to their defaults.
///
/// # Errors
///
/// Returns `InputError::Read` if the file cannot be read and
/// `InputError::InvalidConfig` if it is not a valid configuration document.
pub fn load_config(path: &Path) -> Result<ScanConfig, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text).map_err(|e| match e {
        InputError::InvalidConfig { source, .. } => InputError::InvalidConfig {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    log::debug!(
        "Loaded config from {}: enforce_bem={}, {} critical selector(s), report_duplicates={}",
        path.display(),
        config.naming.enforce_bem,
        config.seo.critical_selectors.len(),
        config.ids.report_duplicates
    );
    Ok(config)
}

/// Parses a scan configuration snapshot from JSON text.
///
/// An empty (or whitespace-only) document yields the default configuration.
pub fn parse_config(text: &str) -> Result<ScanConfig, InputError> {
    if text.trim().is_empty() {
        return Ok(ScanConfig::default());
    }
    serde_json::from_str(text).map_err(|source| InputError::InvalidConfig {
        path: "<inline>".into(),
        source,
    })
}

/// Splits a comma-separated selector list.
///
/// Each entry is trimmed and empty entries are dropped. Selectors that contain
/// commas themselves (selector groups) are split as well.
pub fn parse_selector_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
