//! CSS selector parsing utilities.

use scraper::{ElementRef, Html, Selector};

const TEMPLATE_TAG: &str = "template";

/// Parses a caller-supplied CSS selector.
///
/// Returns `None` (and logs a warning) when the selector is not valid CSS, so
/// a bad configuration entry degrades to "not present" instead of aborting
/// the scan.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for logging (e.g., "critical element check")
pub fn try_parse_selector(selector_str: &str, context: &str) -> Option<Selector> {
    match Selector::parse(selector_str) {
        Ok(selector) => Some(selector),
        Err(e) => {
            log::warn!(
                "Failed to parse CSS selector '{}' in {}: {}. Treating it as absent.",
                selector_str,
                context,
                e
            );
            None
        }
    }
}

/// Parses a CSS selector that must succeed (for compile-time constants).
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

/// Whether the element sits inside a `<template>`.
///
/// The parser stores template content as ordinary children of the template
/// element, but that content is inert and never part of the rendered document.
pub fn is_template_content(element: &ElementRef<'_>) -> bool {
    element
        .ancestors()
        .any(|node| node.value().as_element().is_some_and(|e| e.name() == TEMPLATE_TAG))
}

/// Selects matching elements, skipping inert `<template>` content.
pub fn select_rendered<'a>(
    document: &'a Html,
    selector: &'a Selector,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    document
        .select(selector)
        .filter(|element| !is_template_content(element))
}
