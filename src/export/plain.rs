//! Plain-text export.
//!
//! Renders the report as four panels: overview counters, findings, SEO
//! checks, and the selector map.

use std::collections::HashMap;
use std::io::{self, Write};

use colored::Colorize;

use crate::graph::{GraphEdge, GraphSide};
use crate::rules::{Finding, Severity};
use crate::run::ScanReport;
use crate::utils::sanitize_for_display;

use super::types::{filter_findings, ExportOptions};

fn paint_severity(severity: Severity, color: bool) -> String {
    let label = severity.as_str().to_uppercase();
    if !color {
        return label;
    }
    match severity {
        Severity::Error => label.red().bold().to_string(),
        Severity::Warn => label.yellow().bold().to_string(),
        Severity::Info => label.blue().to_string(),
    }
}

fn paint_status(ok: bool, ok_text: &str, bad_text: &str, color: bool) -> String {
    match (ok, color) {
        (true, true) => ok_text.green().to_string(),
        (false, true) => bad_text.red().to_string(),
        (true, false) => ok_text.to_string(),
        (false, false) => bad_text.to_string(),
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

fn render_overview<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    let s = &report.summary;
    writeln!(out, "Overview")?;
    writeln!(out, "  Total selectors:       {}", s.total_selectors)?;
    writeln!(out, "  Broken references:     {}", s.broken_references)?;
    writeln!(out, "  SEO critical missing:  {}", s.seo_critical_missing)?;
    writeln!(out, "  Hidden above-the-fold: {}", s.hidden_above_fold)
}

fn render_finding<W: Write>(out: &mut W, finding: &Finding, color: bool) -> io::Result<()> {
    let target = [finding.target_type.as_deref(), finding.target_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(
        out,
        "  {} • {}{}",
        paint_severity(finding.severity, color),
        finding.rule_id,
        if target.is_empty() {
            String::new()
        } else {
            format!("  [{}]", sanitize_for_display(&target))
        }
    )?;
    writeln!(out, "    {}", sanitize_for_display(&finding.message))?;
    if let Some(snippet) = &finding.snippet {
        for line in sanitize_for_display(snippet).lines() {
            writeln!(out, "    | {}", line)?;
        }
    }
    Ok(())
}

fn render_findings<W: Write>(
    out: &mut W,
    report: &ScanReport,
    opts: &ExportOptions,
) -> io::Result<()> {
    let findings = filter_findings(&report.findings, opts.severity);
    writeln!(out, "Findings ({})", findings.len())?;
    if findings.is_empty() {
        writeln!(out, "  No findings.")?;
    }
    for finding in findings {
        render_finding(out, finding, opts.color)?;
    }
    Ok(())
}

fn render_seo<W: Write>(out: &mut W, report: &ScanReport, color: bool) -> io::Result<()> {
    let seo = &report.seo;
    writeln!(out, "SEO Checks")?;
    writeln!(out, "  Critical elements:")?;
    for check in &seo.critical {
        writeln!(
            out,
            "    [{}] {}",
            paint_status(check.present, "OK", "Missing", color),
            sanitize_for_display(&check.label)
        )?;
    }
    let types: Vec<String> = seo.jsonld.iter().map(|r| r.type_name.clone()).collect();
    writeln!(out, "  JSON-LD:   {}", sanitize_for_display(&list_or_none(&types)))?;
    writeln!(
        out,
        "  Microdata: {}",
        sanitize_for_display(&list_or_none(&seo.microdata))
    )?;
    writeln!(out, "  RDFa:      {}", sanitize_for_display(&list_or_none(&seo.rdfa)))
}

fn render_graph<W: Write>(out: &mut W, report: &ScanReport, color: bool) -> io::Result<()> {
    let graph = &report.graph;
    let edges: HashMap<&str, &GraphEdge> =
        graph.edges.iter().map(|e| (e.from.as_str(), e)).collect();

    writeln!(out, "Selector Map")?;
    let mut script_nodes = graph.side(GraphSide::Script).peekable();
    if script_nodes.peek().is_none() {
        writeln!(out, "  No selector references.")?;
    }
    for node in script_nodes {
        let label = sanitize_for_display(&node.label).replace('\n', " ");
        match edges.get(node.id.as_str()) {
            Some(edge) => {
                let target = graph
                    .node(&edge.to)
                    .map(|n| sanitize_for_display(&n.label))
                    .unwrap_or_default();
                writeln!(
                    out,
                    "  {} -> {} [{}]",
                    label,
                    target,
                    paint_status(edge.ok, "ok", "broken", color)
                )?;
            }
            None => writeln!(out, "  {} (not resolved)", label)?,
        }
    }
    Ok(())
}

/// Writes the plain-text report: overview, findings, SEO checks and the
/// selector map, separated by blank lines.
pub fn write_plain<W: Write>(
    report: &ScanReport,
    opts: &ExportOptions,
    writer: &mut W,
) -> io::Result<()> {
    render_overview(writer, report)?;
    writeln!(writer)?;
    render_findings(writer, report, opts)?;
    writeln!(writer)?;
    render_seo(writer, report, opts.color)?;
    writeln!(writer)?;
    render_graph(writer, report, opts.color)
}

/// Renders the plain-text report into a string.
pub fn render_plain(report: &ScanReport, opts: &ExportOptions) -> io::Result<String> {
    let mut buf = Vec::new();
    write_plain(report, opts, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
