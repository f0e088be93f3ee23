//! Markup index construction.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::collections::{OccurrenceCounter, OrderedSet};
use crate::config::{CLASS_PREFIX, DATA_ATTRIBUTE_PREFIX, ID_PREFIX};
use crate::utils::select_rendered;

static ALL_ELEMENTS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("*", "ALL_ELEMENTS_SELECTOR"));

/// Normalized selectors found in a markup document.
///
/// - identifiers as `#name`, counted per occurrence
/// - class tokens as `.token`
/// - data attributes as `[name="value"]`
#[derive(Debug, Clone, Default)]
pub struct MarkupIndex {
    /// Every `id` attribute, one occurrence per element
    pub identifier_occurrences: OccurrenceCounter,
    /// Distinct class tokens
    pub class_tokens: OrderedSet,
    /// Distinct data-attribute selectors
    pub data_attribute_selectors: OrderedSet,
}

impl MarkupIndex {
    /// Resolves a normalized selector key against the index.
    ///
    /// Returns `None` for keys the index cannot answer (anything not starting
    /// with `#`, `.` or `[data-`); those are never reported as broken.
    pub fn lookup(&self, key: &str) -> Option<bool> {
        if key.starts_with(ID_PREFIX) {
            Some(self.identifier_occurrences.contains(key))
        } else if key.starts_with(CLASS_PREFIX) {
            Some(self.class_tokens.contains(key))
        } else if key.starts_with(DATA_ATTRIBUTE_PREFIX) {
            Some(self.data_attribute_selectors.contains(key))
        } else {
            None
        }
    }

    /// Number of distinct selectors across all three indices.
    pub fn total_distinct(&self) -> usize {
        self.identifier_occurrences.distinct_len()
            + self.class_tokens.len()
            + self.data_attribute_selectors.len()
    }
}

/// Parses markup text and indexes its identifiers, classes and data attributes.
///
/// Parsing is lenient: malformed markup is repaired the way browsers do it, and
/// empty input yields an empty index.
pub fn index_markup(markup: &str) -> MarkupIndex {
    let document = Html::parse_document(markup);
    index_document(&document)
}

/// Indexes an already-parsed document.
pub fn index_document(document: &Html) -> MarkupIndex {
    let mut index = MarkupIndex::default();

    for element in select_rendered(document, &ALL_ELEMENTS_SELECTOR) {
        let value = element.value();

        if let Some(id) = value.attr("id") {
            index
                .identifier_occurrences
                .add(format!("{}{}", ID_PREFIX, id));
        }

        if let Some(class_attr) = value.attr("class") {
            for token in class_attr.split_whitespace() {
                index.class_tokens.insert(format!("{}{}", CLASS_PREFIX, token));
            }
        }

        for (name, attr_value) in value.attrs() {
            if name.starts_with("data-") {
                index
                    .data_attribute_selectors
                    .insert(format!("[{}=\"{}\"]", name, attr_value));
            }
        }
    }

    log::debug!(
        "Indexed markup: {} id occurrence(s) ({} distinct), {} class token(s), {} data attribute(s)",
        index.identifier_occurrences.total(),
        index.identifier_occurrences.distinct_len(),
        index.class_tokens.len(),
        index.data_attribute_selectors.len()
    );

    index
}
