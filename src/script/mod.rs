//! Script selector extraction (does NOT parse or execute JavaScript).
//!
//! Selector references are found with regular expressions over the raw
//! script text. Matches inside string literals and comments are not excluded,
//! so the extractor can both over- and under-match.

mod extract;

// Re-export public API
pub use extract::{extract_script_selectors, SelectorKind, SelectorReference};
