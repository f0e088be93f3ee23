//! Critical SEO element checklist.

use scraper::Html;
use serde::Serialize;

use crate::config::BUILT_IN_CRITICAL_CHECKS;
use crate::utils::{select_rendered, try_parse_selector};

/// Result of testing one critical selector against the markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriticalElementCheck {
    /// Display label (the selector itself for configured entries)
    pub label: String,
    /// CSS selector that was tested
    pub selector: String,
    /// Whether at least one element matched
    pub present: bool,
}

fn check_selector(document: &Html, label: &str, selector: &str) -> CriticalElementCheck {
    let present = try_parse_selector(selector, "critical element check")
        .map(|parsed| select_rendered(document, &parsed).next().is_some())
        .unwrap_or(false);

    CriticalElementCheck {
        label: label.to_string(),
        selector: selector.to_string(),
        present,
    }
}

/// Evaluates the built-in checks followed by the configured selectors.
///
/// One check per selector, in order, duplicates kept: the result always has
/// `5 + configured.len()` entries. A configured selector that is not valid CSS
/// is reported as absent.
pub fn check_critical_elements(document: &Html, configured: &[String]) -> Vec<CriticalElementCheck> {
    let built_ins = BUILT_IN_CRITICAL_CHECKS
        .iter()
        .map(|check| check_selector(document, check.label, check.selector));
    let extras = configured
        .iter()
        .map(|selector| check_selector(document, selector, selector));

    built_ins.chain(extras).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE_HEAD: &str = r#"
        <html>
            <head>
                <title>Sample Product</title>
                <link rel="canonical" href="https://example.com/product/123">
                <meta name="description" content="Great product">
                <meta property="og:title" content="Sample Product">
            </head>
            <body><h1>Widget</h1></body>
        </html>
    "#;

    #[test]
    fn test_built_ins_all_present() {
        let document = Html::parse_document(COMPLETE_HEAD);
        let checks = check_critical_elements(&document, &[]);
        assert_eq!(checks.len(), 5);
        assert!(checks.iter().all(|c| c.present), "{:?}", checks);
    }

    #[test]
    fn test_built_ins_order_and_labels() {
        let document = Html::parse_document("");
        let checks = check_critical_elements(&document, &[]);
        let labels: Vec<&str> = checks.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Page <title>",
                "Meta description",
                "Canonical link",
                "Open Graph title",
                "H1 present"
            ]
        );
        assert!(checks.iter().all(|c| !c.present));
    }

    #[test]
    fn test_configured_selectors_follow_built_ins_with_duplicates() {
        let document = Html::parse_document(COMPLETE_HEAD);
        let configured = vec!["h1".to_string(), "footer".to_string(), "h1".to_string()];
        let checks = check_critical_elements(&document, &configured);

        assert_eq!(checks.len(), 8);
        assert_eq!(checks[5].label, "h1");
        assert_eq!(checks[5].selector, "h1");
        assert!(checks[5].present);
        assert_eq!(checks[6].selector, "footer");
        assert!(!checks[6].present);
        assert_eq!(checks[7].selector, "h1");
        assert!(checks[7].present);
    }

    #[test]
    fn test_invalid_configured_selector_is_absent() {
        let document = Html::parse_document(COMPLETE_HEAD);
        let checks = check_critical_elements(&document, &["div[".to_string()]);
        assert_eq!(checks.len(), 6);
        assert!(!checks[5].present);
    }

    #[test]
    fn test_parser_inserts_implicit_head_elements() {
        // A bare <title> without <html>/<head> still counts
        let document = Html::parse_document("<title>t</title><h1>x</h1>");
        let checks = check_critical_elements(&document, &[]);
        assert!(checks[0].present);
        assert!(checks[4].present);
    }

    #[test]
    fn test_template_content_does_not_satisfy_checks() {
        let document = Html::parse_document(
            r#"<title>t</title><template><h1>later</h1><footer></footer></template>"#,
        );
        let checks = check_critical_elements(&document, &["footer".to_string()]);
        assert!(checks[0].present);
        assert!(!checks[4].present);
        assert!(!checks[5].present);
    }
}
