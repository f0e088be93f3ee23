//! Rule evaluation.

use crate::config::{ScanConfig, CLASS_PREFIX};
use crate::markup::MarkupIndex;
use crate::script::SelectorReference;
use crate::seo::SeoReport;

use super::bem::is_valid_bem;
use super::types::{Finding, RuleId};

/// Everything the rules read.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub index: &'a MarkupIndex,
    pub references: &'a [SelectorReference],
    pub seo: &'a SeoReport,
    pub config: &'a ScanConfig,
}

fn selector_mismatches(ctx: &RuleContext<'_>, findings: &mut Vec<Finding>) {
    for reference in ctx.references {
        let key = reference.key();
        // Only #, . and [data- keys can be checked; everything else is skipped
        if ctx.index.lookup(&key) == Some(false) {
            findings.push(
                Finding::new(
                    RuleId::SelectorMismatch,
                    format!("Referenced in JS but not found in HTML: {}", key),
                )
                .with_target("css", key.clone())
                .with_snippet(reference.matched_snippet.clone()),
            );
        }
    }
}

fn missing_critical_elements(ctx: &RuleContext<'_>, findings: &mut Vec<Finding>) {
    for check in ctx.seo.critical.iter().filter(|c| !c.present) {
        findings.push(
            Finding::new(
                RuleId::SeoCriticalMissing,
                format!(
                    "Missing critical SEO element: {} ({})",
                    check.label, check.selector
                ),
            )
            .with_target("seo", check.selector.clone()),
        );
    }
}

fn missing_json_ld(ctx: &RuleContext<'_>, findings: &mut Vec<Finding>) {
    // Microdata and RDFa do not count
    if ctx.seo.jsonld.is_empty() {
        findings.push(
            Finding::new(RuleId::JsonldMissing, "No JSON-LD structured data detected.")
                .with_target_type("seo"),
        );
    }
}

fn duplicate_ids(ctx: &RuleContext<'_>, findings: &mut Vec<Finding>) {
    if !ctx.config.ids.report_duplicates {
        return;
    }
    for (id, count) in ctx.index.identifier_occurrences.iter() {
        if count > 1 {
            findings.push(
                Finding::new(
                    RuleId::DuplicateId,
                    format!("Duplicate id detected: {} ({} occurrences)", id, count),
                )
                .with_target("id", id),
            );
        }
    }
}

fn bem_naming(ctx: &RuleContext<'_>, findings: &mut Vec<Finding>) {
    if !ctx.config.naming.enforce_bem {
        return;
    }
    for class in ctx.index.class_tokens.iter() {
        let name = class.strip_prefix(CLASS_PREFIX).unwrap_or(class);
        if !is_valid_bem(name) {
            findings.push(
                Finding::new(
                    RuleId::NamingBem,
                    format!("Class doesn't match BEM pattern: {}", class),
                )
                .with_target("class", class),
            );
        }
    }
}

/// Evaluates every rule category in fixed order.
///
/// Order: selector mismatches, missing critical elements, missing JSON-LD,
/// duplicate identifiers, BEM naming. The resulting order is stable for a
/// given input. Hidden above-the-fold elements only feed the summary counter
/// and never produce findings.
pub fn apply_rules(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();

    selector_mismatches(ctx, &mut findings);
    missing_critical_elements(ctx, &mut findings);
    missing_json_ld(ctx, &mut findings);
    duplicate_ids(ctx, &mut findings);
    bem_naming(ctx, &mut findings);

    log::debug!("Rules produced {} finding(s)", findings.len());
    findings
}
