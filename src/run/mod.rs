//! Scan orchestration.
//!
//! Sequences the components over one `(markup, script, config)` triple and
//! assembles the report. A scan is a pure function of its inputs: nothing is
//! shared between invocations and nothing is written anywhere.

mod summary;

use scraper::Html;
use serde::Serialize;

use crate::config::ScanConfig;
use crate::graph::{build_reference_graph, ReferenceGraph};
use crate::markup::index_document;
use crate::rules::{apply_rules, Finding, RuleContext};
use crate::script::extract_script_selectors;
use crate::seo::{detect_seo_features, SeoReport};
use crate::visibility::detect_hidden_above_fold;

pub use summary::SummaryCounters;

/// Results of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Findings in rule-category order
    pub findings: Vec<Finding>,
    /// Headline counters
    pub summary: SummaryCounters,
    /// SEO detector output
    pub seo: SeoReport,
    /// Script-to-markup reference topology
    pub graph: ReferenceGraph,
}

/// Runs every check over a markup document and a script snippet.
///
/// Never fails: malformed markup is repaired by the parser, unparseable
/// structured data is skipped, and anything missing becomes a finding. Empty
/// strings are valid inputs.
///
/// # Examples
///
/// ```
/// use selector_audit::{run_checks, ScanConfig};
///
/// let report = run_checks(
///     r#"<div id="a"></div>"#,
///     "document.getElementById('a')",
///     &ScanConfig::default(),
/// );
/// assert_eq!(report.summary.broken_references, 0);
/// assert_eq!(report.summary.seo_critical_missing, 5);
/// ```
pub fn run_checks(markup: &str, script: &str, config: &ScanConfig) -> ScanReport {
    let document = Html::parse_document(markup);
    let index = index_document(&document);
    let references = extract_script_selectors(script);
    let seo = detect_seo_features(&document, &config.seo.critical_selectors);
    let hidden_above_fold = detect_hidden_above_fold(&document);

    let findings = apply_rules(&RuleContext {
        index: &index,
        references: &references,
        seo: &seo,
        config,
    });
    let graph = build_reference_graph(&references, &index);
    let summary = SummaryCounters::collect(&index, &findings, &seo, hidden_above_fold.len());

    log::info!(
        "Scan complete: {} finding(s), {} selector(s), {} broken reference(s), {} critical missing, {} hidden above the fold",
        findings.len(),
        summary.total_selectors,
        summary.broken_references,
        summary.seo_critical_missing,
        summary.hidden_above_fold
    );

    ScanReport {
        findings,
        summary,
        seo,
        graph,
    }
}
