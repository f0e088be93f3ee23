//! Configuration types and CLI options.
//!
//! This module defines the scan configuration snapshot the engine reads, plus
//! the enums used for command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable panels (overview, findings, SEO, selector map)
    Plain,
    /// Pretty-printed JSON report
    Json,
}

/// Which findings to print.
///
/// Filtering only affects rendering; summary counters always describe the
/// full scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SeverityFilter {
    /// Every finding
    #[default]
    All,
    /// Only error findings
    Error,
    /// Only warnings
    Warn,
    /// Only informational findings
    Info,
}

/// Exit code policy for the CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 when the scan completes
    #[default]
    Never,
    /// Exit 2 when any error finding is reported
    Errors,
    /// Exit 2 when any error or warning finding is reported
    Warnings,
}

/// Class naming settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamingConfig {
    /// Validate every class token against the BEM grammar
    #[serde(alias = "enforceBEM")]
    pub enforce_bem: bool,
}

/// SEO settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoConfig {
    /// Extra selectors that must exist, checked after the built-ins
    pub critical_selectors: Vec<String>,
}

/// Identifier settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdConfig {
    /// Report identifiers used by more than one element.
    ///
    /// Turning this off reproduces the legacy behaviour where identifiers were
    /// collapsed into a unique set and duplicates were never reported.
    pub report_duplicates: bool,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            report_duplicates: true,
        }
    }
}

/// Scan configuration snapshot.
///
/// Owned by the caller; the engine only reads it. Every section falls back to
/// its default, so partial JSON documents deserialize.
///
/// # Examples
///
/// ```
/// use selector_audit::ScanConfig;
///
/// let config: ScanConfig =
///     serde_json::from_str(r#"{"naming": {"enforceBEM": true}}"#).unwrap();
/// assert!(config.naming.enforce_bem);
/// assert!(config.seo.critical_selectors.is_empty());
/// assert!(config.ids.report_duplicates);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanConfig {
    /// Class naming rules
    pub naming: NamingConfig,
    /// SEO checklist
    pub seo: SeoConfig,
    /// Identifier rules
    pub ids: IdConfig,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Scan a page against a script
/// selector_audit --html page.html --script app.js
///
/// # Enforce BEM and require a breadcrumb, print JSON
/// selector_audit --html page.html --script app.js --enforce-bem \
///     --critical-selectors 'nav.breadcrumb, footer' --format json
///
/// # Read markup from stdin
/// cat page.html | selector_audit --html - --script app.js
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "selector_audit",
    about = "Cross-references markup against a script to find broken selectors and SEO gaps."
)]
pub struct Opt {
    /// Markup file to scan (`-` reads stdin)
    #[arg(long, value_parser)]
    pub html: Option<PathBuf>,

    /// Script file to extract selectors from (`-` reads stdin)
    #[arg(long, value_parser)]
    pub script: Option<PathBuf>,

    /// JSON configuration snapshot
    #[arg(long, value_parser)]
    pub config: Option<PathBuf>,

    /// Validate class names against BEM (overrides the config file)
    #[arg(long)]
    pub enforce_bem: bool,

    /// Comma-separated selectors to require, appended to the configured ones
    #[arg(long)]
    pub critical_selectors: Option<String>,

    /// Do not report duplicate identifiers
    #[arg(long)]
    pub no_duplicate_ids: bool,

    /// Report format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Findings to print: all|error|warn|info
    #[arg(long, value_enum, default_value_t = SeverityFilter::All)]
    pub severity: SeverityFilter,

    /// Exit code policy: never|errors|warnings
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}
