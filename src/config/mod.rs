//! Application configuration and constants.
//!
//! This module provides:
//! - Engine constants (built-in SEO checks, above-the-fold patterns, limits)
//! - The scan configuration snapshot and its loader
//! - CLI option types and parsing

mod constants;
mod loader;
mod types;

// Re-export all constants
pub use constants::*;
pub use loader::{load_config, parse_config, parse_selector_list};
pub use types::{
    FailOn, IdConfig, LogFormat, LogLevel, NamingConfig, Opt, OutputFormat, ScanConfig,
    SeoConfig, SeverityFilter,
};
