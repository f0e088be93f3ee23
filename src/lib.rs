//! selector_audit library: cross-references markup against script selectors
//!
//! This library scans a markup document and a script snippet together and
//! reports:
//! - selectors the script references that the markup does not contain
//! - missing SEO-critical elements and missing JSON-LD structured data
//! - duplicate identifiers and (optionally) class names that break BEM
//! - headings, headers and navigation hidden above the fold
//!
//! It also builds a bipartite reference graph between script references and
//! markup selectors for inspection.
//!
//! # Example
//!
//! ```
//! use selector_audit::{run_checks, ScanConfig};
//!
//! let report = run_checks(
//!     r#"<div id="cart"></div>"#,
//!     "document.querySelector('#checkout')",
//!     &ScanConfig::default(),
//! );
//! assert_eq!(report.summary.broken_references, 1);
//! assert!(!report.graph.edges[0].ok);
//! ```
//!
//! Script analysis is pattern based, not a JavaScript parser: matches inside
//! strings and comments are not excluded.

pub mod app;
pub mod config;
mod error_handling;
pub mod export;
mod graph;
pub mod initialization;
mod markup;
mod rules;
mod run;
mod script;
mod seo;
mod utils;
mod visibility;

// Re-export public API
pub use config::{load_config, parse_config, parse_selector_list, ScanConfig};
pub use error_handling::{InitializationError, InputError};
pub use graph::{build_reference_graph, GraphEdge, GraphNode, GraphSide, ReferenceGraph};
pub use markup::{index_document, index_markup, MarkupIndex, OccurrenceCounter, OrderedSet};
pub use rules::{apply_rules, is_valid_bem, Finding, RuleContext, RuleId, Severity};
pub use run::{run_checks, ScanReport, SummaryCounters};
pub use script::{extract_script_selectors, SelectorKind, SelectorReference};
pub use seo::{
    check_critical_elements, detect_seo_features, extract_json_ld, extract_microdata_types,
    extract_rdfa_types, CriticalElementCheck, SeoReport, StructuredDataRecord,
};
pub use visibility::detect_hidden_above_fold;
