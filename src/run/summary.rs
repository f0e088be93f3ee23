//! Summary counters.

use serde::Serialize;

use crate::markup::MarkupIndex;
use crate::rules::{Finding, RuleId, Severity};
use crate::seo::SeoReport;

/// Headline numbers for a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCounters {
    /// Distinct identifiers + class tokens + data attributes in the markup
    pub total_selectors: usize,
    /// Error-severity selector-mismatch findings
    pub broken_references: usize,
    /// Critical checks that found nothing
    pub seo_critical_missing: usize,
    /// Hidden above-the-fold candidates
    pub hidden_above_fold: usize,
}

impl SummaryCounters {
    pub fn collect(
        index: &MarkupIndex,
        findings: &[Finding],
        seo: &SeoReport,
        hidden_above_fold: usize,
    ) -> Self {
        Self {
            total_selectors: index.total_distinct(),
            broken_references: findings
                .iter()
                .filter(|f| f.rule_id == RuleId::SelectorMismatch && f.severity == Severity::Error)
                .count(),
            seo_critical_missing: seo.missing_critical(),
            hidden_above_fold,
        }
    }
}
