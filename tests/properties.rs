//! Invariants that hold for every scan.

use selector_audit::{run_checks, RuleId, ScanConfig};

const MARKUP_SAMPLES: &[&str] = &[
    "",
    "<p>plain</p>",
    r#"<div id="a" class="card card--big" data-role="menu"><div id="a"></div></div>"#,
    r#"<html><head><title>t</title></head><body><h1 hidden>h</h1><nav class="Nav_Bar"></nav>"#,
    "<div><span>unclosed <b>tags",
    r#"<script type="application/ld+json">{not json</script><section typeof="Event"></section>"#,
];

const SCRIPT_SAMPLES: &[&str] = &[
    "",
    "document.getElementById('a'); document.getElementById('b');",
    r#"$(".card"); document.querySelectorAll('[data-role="menu"]'); $('ul > li');"#,
    "document.querySelector(`#a`); $('#a'); $('div.x')",
    "// getElementById('commented')\nconst s = \"querySelector('.in-string')\";",
];

fn configs() -> Vec<ScanConfig> {
    let mut custom = ScanConfig::default();
    custom.naming.enforce_bem = true;
    custom.seo.critical_selectors = vec![
        "footer".to_string(),
        "nav.breadcrumb".to_string(),
        "div[".to_string(),
    ];
    vec![ScanConfig::default(), custom]
}

#[test]
fn test_critical_check_count() {
    for config in configs() {
        for markup in MARKUP_SAMPLES {
            let report = run_checks(markup, "", &config);
            assert_eq!(
                report.seo.critical.len(),
                5 + config.seo.critical_selectors.len(),
                "markup: {}",
                markup
            );
        }
    }
}

#[test]
fn test_selector_mismatches_only_for_checkable_prefixes() {
    for config in configs() {
        for markup in MARKUP_SAMPLES {
            for script in SCRIPT_SAMPLES {
                let report = run_checks(markup, script, &config);
                for finding in report
                    .findings
                    .iter()
                    .filter(|f| f.rule_id == RuleId::SelectorMismatch)
                {
                    let target = finding.target_name.as_deref().unwrap_or_default();
                    assert!(
                        target.starts_with('#')
                            || target.starts_with('.')
                            || target.starts_with("[data-"),
                        "unexpected mismatch target {:?}",
                        target
                    );
                }
            }
        }
    }
}

#[test]
fn test_scans_are_deterministic() {
    for config in configs() {
        for markup in MARKUP_SAMPLES {
            for script in SCRIPT_SAMPLES {
                let first = run_checks(markup, script, &config);
                let second = run_checks(markup, script, &config);
                assert_eq!(first, second);
                assert_eq!(
                    serde_json::to_string(&first).expect("serialize"),
                    serde_json::to_string(&second).expect("serialize")
                );
            }
        }
    }
}

#[test]
fn test_broken_references_match_graph() {
    for markup in MARKUP_SAMPLES {
        for script in SCRIPT_SAMPLES {
            let report = run_checks(markup, script, &ScanConfig::default());
            assert_eq!(report.summary.broken_references, report.graph.broken_edges());
        }
    }
}
