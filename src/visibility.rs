//! Above-the-fold visibility heuristic.
//!
//! Flags headings, headers and navigation (by tag or by `hero`/`header`/`nav`
//! class) that are hidden through an inline style or the `hidden` attribute.
//! Style checks are plain substring matches on the lowercased `style`
//! attribute, not a CSS parser.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::{ABOVE_FOLD_SELECTOR_STR, HIDDEN_SNIPPET_MAX_CHARS, HIDDEN_STYLE_MARKERS};
use crate::utils::{parse_selector_unsafe, select_rendered, truncate_chars};

static ABOVE_FOLD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ABOVE_FOLD_SELECTOR_STR, "ABOVE_FOLD_SELECTOR"));

fn is_hidden(element: &ElementRef<'_>) -> bool {
    let value = element.value();
    let style = value.attr("style").unwrap_or_default().to_lowercase();
    HIDDEN_STYLE_MARKERS
        .iter()
        .any(|marker| style.contains(marker))
        || value.attr("hidden").is_some()
}

/// Returns the outer markup (first 120 characters) of every hidden
/// above-the-fold candidate, in document order.
///
/// An element matching several candidate patterns is reported once.
pub fn detect_hidden_above_fold(document: &Html) -> Vec<String> {
    let hidden: Vec<String> = select_rendered(document, &ABOVE_FOLD_SELECTOR)
        .filter(is_hidden)
        .map(|element| truncate_chars(&element.html(), HIDDEN_SNIPPET_MAX_CHARS))
        .collect();

    log::debug!("Found {} hidden above-the-fold element(s)", hidden.len());
    hidden
}
