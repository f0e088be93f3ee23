//! Export types and options.

use crate::config::{OutputFormat, SeverityFilter};
use crate::rules::{Finding, Severity};

/// Options for rendering a report.
#[derive(Clone, Copy, Debug)]
pub struct ExportOptions {
    /// Output format
    pub format: OutputFormat,
    /// Findings to include
    pub severity: SeverityFilter,
    /// Colorize plain output
    pub color: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            severity: SeverityFilter::All,
            color: false,
        }
    }
}

impl SeverityFilter {
    /// Whether a finding of `severity` passes the filter.
    pub fn accepts(&self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Error => severity == Severity::Error,
            SeverityFilter::Warn => severity == Severity::Warn,
            SeverityFilter::Info => severity == Severity::Info,
        }
    }
}

/// Findings that pass the filter, in report order.
pub fn filter_findings(findings: &[Finding], filter: SeverityFilter) -> Vec<&Finding> {
    findings
        .iter()
        .filter(|f| filter.accepts(f.severity))
        .collect()
}
