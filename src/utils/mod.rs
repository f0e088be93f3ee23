//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - String truncation and sanitization

mod selector;
mod text;

pub use selector::{is_template_content, parse_selector_unsafe, select_rendered, try_parse_selector};
pub use text::{sanitize_for_display, truncate_chars};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
