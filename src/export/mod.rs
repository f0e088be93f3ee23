//! Report export.
//!
//! Renders a `ScanReport` as plain text (overview, findings, SEO checks,
//! selector map) or pretty-printed JSON. The severity filter only narrows the
//! findings list; summary counters always describe the whole scan.

mod json;
mod pipe;
mod plain;
mod types;

use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::run::ScanReport;

pub use json::write_json;
pub use pipe::IgnoreBrokenPipe;
pub use plain::{render_plain, write_plain};
pub use types::{filter_findings, ExportOptions};

/// Writes the report in the requested format.
pub fn write_report<W: Write>(
    report: &ScanReport,
    opts: &ExportOptions,
    writer: &mut W,
) -> io::Result<()> {
    match opts.format {
        OutputFormat::Plain => write_plain(report, opts, writer)?,
        OutputFormat::Json => write_json(report, opts, writer)?,
    }
    writer.flush()
}

/// Writes the report to stdout, ignoring a closed pipe.
pub fn print_report(report: &ScanReport, opts: &ExportOptions) -> io::Result<()> {
    let mut stdout = IgnoreBrokenPipe::new(io::stdout().lock());
    write_report(report, opts, &mut stdout)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
