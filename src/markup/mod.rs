//! Markup indexing.
//!
//! Walks every element of a leniently parsed document and records the
//! selectors a script could reference: identifiers (with occurrence counts),
//! class tokens, and data attributes.
//!
//! All parsing is done with the `scraper` crate (html5ever underneath), which
//! never fails and repairs structural errors per browser rules.

mod collections;
mod index;

// Re-export public API
pub use collections::{OccurrenceCounter, OrderedSet};
pub use index::{index_document, index_markup, MarkupIndex};
