//! Finding statistics logging.

use log::info;
use strum::IntoEnumIterator;

use crate::rules::{Finding, RuleId, Severity};

/// Counts findings produced by one rule.
pub fn count_by_rule(findings: &[Finding], rule: RuleId) -> usize {
    findings.iter().filter(|f| f.rule_id == rule).count()
}

/// Counts findings of one severity.
pub fn count_by_severity(findings: &[Finding], severity: Severity) -> usize {
    findings.iter().filter(|f| f.severity == severity).count()
}

/// Logs per-severity and per-rule finding counts.
pub fn log_finding_statistics(findings: &[Finding]) {
    if findings.is_empty() {
        info!("No findings");
        return;
    }

    let by_severity: Vec<String> = Severity::iter()
        .map(|s| format!("{}={}", s, count_by_severity(findings, s)))
        .collect();
    info!(
        "Finding Counts ({} total): {}",
        findings.len(),
        by_severity.join(", ")
    );

    for rule in RuleId::iter() {
        let count = count_by_rule(findings, rule);
        if count > 0 {
            info!("   {}: {}", rule.as_str(), count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let findings = vec![
            Finding::new(RuleId::SeoCriticalMissing, "a"),
            Finding::new(RuleId::SeoCriticalMissing, "b"),
            Finding::new(RuleId::JsonldMissing, "c"),
        ];
        assert_eq!(count_by_rule(&findings, RuleId::SeoCriticalMissing), 2);
        assert_eq!(count_by_rule(&findings, RuleId::NamingBem), 0);
        assert_eq!(count_by_severity(&findings, Severity::Error), 2);
        assert_eq!(count_by_severity(&findings, Severity::Warn), 1);
        // Logging without an installed logger is a no-op
        log_finding_statistics(&findings);
        log_finding_statistics(&[]);
    }
}
