//! Rule engine.
//!
//! Turns the indexer, extractor and SEO detector outputs into findings. The
//! rule categories run in a fixed order, and that order is the order of the
//! findings list.
//!
//! Severities:
//! - **Error**: broken selector references, missing critical elements, duplicate ids
//! - **Warn**: no JSON-LD structured data
//! - **Info**: class names that do not follow BEM (only when enabled)

mod bem;
mod engine;
mod types;

// Re-export public API
pub use bem::is_valid_bem;
pub use engine::{apply_rules, RuleContext};
pub use types::{Finding, RuleId, Severity};
