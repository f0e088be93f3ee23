//! Structured data extraction.
//!
//! This module extracts in-markup metadata:
//! - JSON-LD blocks (`script[type="application/ld+json"]`)
//! - Microdata types (`itemtype` on `itemscope` elements)
//! - RDFa-style types (`typeof`)

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::Serialize;
use serde_json::Value;

use crate::config::{
    LINKED_DATA_SELECTOR_STR, LINKED_DATA_TYPE_KEY, MICRODATA_SELECTOR_STR, RDFA_SELECTOR_STR,
    UNKNOWN_TYPE_NAME,
};
use crate::markup::OrderedSet;
use crate::utils::{parse_selector_unsafe, select_rendered};

static LINKED_DATA_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(LINKED_DATA_SELECTOR_STR, "LINKED_DATA_SELECTOR"));

static MICRODATA_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(MICRODATA_SELECTOR_STR, "MICRODATA_SELECTOR"));

static RDFA_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(RDFA_SELECTOR_STR, "RDFA_SELECTOR"));

/// One JSON-LD record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDataRecord {
    /// Declared `@type`, or `Unknown`
    pub type_name: String,
}

/// Reads the `@type` of a parsed record, defaulting to `Unknown`.
///
/// A type list (`["WebPage", "Article"]`) becomes `"WebPage, Article"`.
fn record_type_name(value: &Value) -> String {
    let type_value = value
        .as_object()
        .and_then(|obj| obj.get(LINKED_DATA_TYPE_KEY));

    let type_name = match type_value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    };

    if type_name.is_empty() {
        UNKNOWN_TYPE_NAME.to_string()
    } else {
        type_name
    }
}

/// Extracts JSON-LD records from every linked-data block.
///
/// A block that fails to parse is skipped silently. A top-level array yields
/// one record per element. An empty block is read as `{}` and yields a single
/// `Unknown` record.
pub fn extract_json_ld(document: &Html) -> Vec<StructuredDataRecord> {
    let mut records = Vec::new();

    for block in select_rendered(document, &LINKED_DATA_SELECTOR) {
        let text: String = block.text().collect();
        let source = if text.is_empty() { "{}" } else { text.as_str() };

        match serde_json::from_str::<Value>(source) {
            Ok(Value::Array(items)) => {
                records.extend(items.iter().map(|item| StructuredDataRecord {
                    type_name: record_type_name(item),
                }));
            }
            Ok(value) => records.push(StructuredDataRecord {
                type_name: record_type_name(&value),
            }),
            Err(e) => {
                log::debug!("Skipping malformed JSON-LD block: {}", e);
            }
        }
    }

    records
}

/// Collects an attribute's distinct non-empty values from matching elements.
fn collect_distinct_attr(document: &Html, selector: &Selector, attr: &str) -> Vec<String> {
    let mut types = OrderedSet::new();
    for element in select_rendered(document, selector) {
        if let Some(value) = element.value().attr(attr) {
            if !value.is_empty() {
                types.insert(value.to_string());
            }
        }
    }
    types.iter().map(str::to_string).collect()
}

/// Distinct `itemtype` values of elements that also carry `itemscope`.
pub fn extract_microdata_types(document: &Html) -> Vec<String> {
    collect_distinct_attr(document, &MICRODATA_SELECTOR, "itemtype")
}

/// Distinct `typeof` values.
pub fn extract_rdfa_types(document: &Html) -> Vec<String> {
    collect_distinct_attr(document, &RDFA_SELECTOR, "typeof")
}
