//! JSON export.

use std::io::{self, Write};

use serde::Serialize;

use crate::graph::ReferenceGraph;
use crate::rules::Finding;
use crate::run::{ScanReport, SummaryCounters};
use crate::seo::SeoReport;

use super::types::{filter_findings, ExportOptions};

/// Report view with the findings list filtered; counters stay complete.
#[derive(Serialize)]
struct FilteredReport<'a> {
    findings: Vec<&'a Finding>,
    summary: &'a SummaryCounters,
    seo: &'a SeoReport,
    graph: &'a ReferenceGraph,
}

/// Writes the report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(
    report: &ScanReport,
    opts: &ExportOptions,
    writer: &mut W,
) -> io::Result<()> {
    let view = FilteredReport {
        findings: filter_findings(&report.findings, opts.severity),
        summary: &report.summary,
        seo: &report.seo,
        graph: &report.graph,
    };
    serde_json::to_writer_pretty(&mut *writer, &view)?;
    writeln!(writer)
}
