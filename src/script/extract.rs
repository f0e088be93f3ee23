//! Pattern matchers for selector references.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::config::ID_PREFIX;

/// How a selector was referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    /// Bare identifier passed to `getElementById`
    Id,
    /// CSS selector text passed to `querySelector(All)` or `$()`
    Css,
}

/// One selector reference found in the script, in order of discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorReference {
    /// Reference kind
    pub kind: SelectorKind,
    /// Captured literal argument, verbatim
    pub raw_text: String,
    /// The whole matched call, for provenance display
    pub matched_snippet: String,
    /// Position in the extracted list
    pub ordinal_index: usize,
}

impl SelectorReference {
    /// Normalized lookup key: `#name` for identifier lookups, the raw text otherwise.
    pub fn key(&self) -> String {
        match self.kind {
            SelectorKind::Id => format!("{}{}", ID_PREFIX, self.raw_text),
            SelectorKind::Css => self.raw_text.clone(),
        }
    }
}

/// Helper function to compile a static regex pattern, panicking with a detailed
/// error message if compilation fails.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

// getElementById('id'), any quote style, no quotes inside the name
static GET_ELEMENT_BY_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r#"getElementById\s*\(\s*['"`]([^'"`]+)['"`]\s*\)"#,
        "GET_ELEMENT_BY_ID_PATTERN",
    )
});

// querySelector('...') / querySelectorAll('...'); the closing quote must match the opening one
static QUERY_SELECTOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r#"querySelector(?:All)?\s*\(\s*(?:'([\s\S]*?)'|"([\s\S]*?)"|`([\s\S]*?)`)\s*\)"#,
        "QUERY_SELECTOR_PATTERN",
    )
});

// $('...') shorthand library call
static SHORTHAND_CALL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r#"\$\s*\(\s*(?:'([\s\S]*?)'|"([\s\S]*?)"|`([\s\S]*?)`)\s*\)"#,
        "SHORTHAND_CALL_PATTERN",
    )
});

/// Returns the first participating capture group (one per quote style).
fn quoted_argument<'h>(cap: &Captures<'h>) -> Option<&'h str> {
    (1..cap.len()).find_map(|i| cap.get(i)).map(|m| m.as_str())
}

/// Extracts selector references from script text.
///
/// Runs three independent matchers in a fixed order: identifier lookups,
/// query selectors, then shorthand calls. Each contributes its matches in
/// order of appearance; references are never deduplicated.
///
/// # Examples
///
/// ```
/// use selector_audit::{extract_script_selectors, SelectorKind};
///
/// let refs = extract_script_selectors("document.querySelector('#cart .item')");
/// assert_eq!(refs.len(), 1);
/// assert_eq!(refs[0].kind, SelectorKind::Css);
/// assert_eq!(refs[0].raw_text, "#cart .item");
/// ```
pub fn extract_script_selectors(script: &str) -> Vec<SelectorReference> {
    let mut found: Vec<(SelectorKind, String, String)> = Vec::new();

    for cap in GET_ELEMENT_BY_ID_PATTERN.captures_iter(script) {
        if let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) {
            found.push((
                SelectorKind::Id,
                name.as_str().to_string(),
                whole.as_str().to_string(),
            ));
        }
    }

    for pattern in [&*QUERY_SELECTOR_PATTERN, &*SHORTHAND_CALL_PATTERN] {
        for cap in pattern.captures_iter(script) {
            if let (Some(whole), Some(selector)) = (cap.get(0), quoted_argument(&cap)) {
                found.push((
                    SelectorKind::Css,
                    selector.to_string(),
                    whole.as_str().to_string(),
                ));
            }
        }
    }

    let references: Vec<SelectorReference> = found
        .into_iter()
        .enumerate()
        .map(
            |(ordinal_index, (kind, raw_text, matched_snippet))| SelectorReference {
                kind,
                raw_text,
                matched_snippet,
                ordinal_index,
            },
        )
        .collect();

    log::debug!("Extracted {} selector reference(s) from script", references.len());
    references
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_texts(refs: &[SelectorReference]) -> Vec<&str> {
        refs.iter().map(|r| r.raw_text.as_str()).collect()
    }

    #[test]
    fn test_extract_empty_script() {
        assert!(extract_script_selectors("").is_empty());
    }

    #[test]
    fn test_extract_get_element_by_id() {
        let refs = extract_script_selectors("document.getElementById('buyNowBtn').click();");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].kind, SelectorKind::Id);
        assert_eq!(refs[0].raw_text, "buyNowBtn");
        assert_eq!(refs[0].matched_snippet, "getElementById('buyNowBtn')");
        assert_eq!(refs[0].key(), "#buyNowBtn");
    }

    #[test]
    fn test_extract_get_element_by_id_quote_styles_and_spacing() {
        let script = r#"getElementById( "a" ); getElementById(`b`); getElementById ('c')"#;
        let refs = extract_script_selectors(script);
        assert_eq!(raw_texts(&refs), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_extract_get_element_by_id_ignores_variables() {
        assert!(extract_script_selectors("getElementById(someId)").is_empty());
    }

    #[test]
    fn test_extract_query_selector_keeps_complex_selector_verbatim() {
        let refs =
            extract_script_selectors(r#"document.querySelectorAll("nav > ul li.active:first-child")"#);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].kind, SelectorKind::Css);
        assert_eq!(refs[0].raw_text, "nav > ul li.active:first-child");
        assert_eq!(refs[0].key(), "nav > ul li.active:first-child");
    }

    #[test]
    fn test_extract_query_selector_with_inner_quotes() {
        let refs = extract_script_selectors(r#"document.querySelector('[data-cta="buy-now"]');"#);
        assert_eq!(raw_texts(&refs), vec![r#"[data-cta="buy-now"]"#]);
        assert_eq!(
            refs[0].matched_snippet,
            r#"querySelector('[data-cta="buy-now"]')"#
        );
    }

    #[test]
    fn test_extract_query_selector_spans_lines() {
        let refs = extract_script_selectors("querySelector(`\n.card\n`)");
        assert_eq!(raw_texts(&refs), vec!["\n.card\n"]);
    }

    #[test]
    fn test_extract_shorthand_call() {
        let refs = extract_script_selectors(r#"$('#menu').toggle(); $ ( ".item" )"#);
        assert_eq!(raw_texts(&refs), vec!["#menu", ".item"]);
        assert!(refs.iter().all(|r| r.kind == SelectorKind::Css));
    }

    #[test]
    fn test_extract_order_is_grouped_by_matcher() {
        let script = r#"
            $('.late');
            document.querySelector('#second');
            document.getElementById('first');
            document.querySelector('.third');
        "#;
        let refs = extract_script_selectors(script);
        assert_eq!(raw_texts(&refs), vec!["first", "#second", ".third", ".late"]);
        let ordinals: Vec<usize> = refs.iter().map(|r| r.ordinal_index).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_extract_does_not_deduplicate() {
        let refs = extract_script_selectors("$('.a'); $('.a'); $('.a');");
        assert_eq!(refs.len(), 3);
    }

    #[test]
    fn test_extract_matches_inside_comments() {
        // Known limitation: comments are not stripped
        let refs = extract_script_selectors("// document.querySelector('#gone')");
        assert_eq!(raw_texts(&refs), vec!["#gone"]);
    }

    #[test]
    fn test_extract_mismatched_quotes_do_not_match() {
        assert!(extract_script_selectors(r#"querySelector('.a")"#).is_empty());
    }
}
