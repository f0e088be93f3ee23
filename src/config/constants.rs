//! Configuration constants.
//!
//! This module defines the fixed inputs of the analysis engine: the linked-data
//! content type, the built-in SEO checklist, the above-the-fold candidate
//! patterns, and display limits.

/// Content type marking a linked-data (JSON-LD) block.
pub const LINKED_DATA_SELECTOR_STR: &str = r#"script[type="application/ld+json"]"#;

/// Microdata scope carriers (`itemscope` together with `itemtype`).
pub const MICRODATA_SELECTOR_STR: &str = "[itemscope][itemtype]";

/// RDFa-style relational annotation carriers.
pub const RDFA_SELECTOR_STR: &str = "[typeof]";

/// Type field read from each structured-data record.
pub const LINKED_DATA_TYPE_KEY: &str = "@type";

/// Type name used when a structured-data record declares none.
pub const UNKNOWN_TYPE_NAME: &str = "Unknown";

/// A built-in critical-element check: CSS selector and display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltInCheck {
    /// CSS selector tested against the parsed markup
    pub selector: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

/// Critical SEO elements that every page is checked for, in report order.
///
/// Caller-configured selectors are always appended after these.
pub const BUILT_IN_CRITICAL_CHECKS: &[BuiltInCheck] = &[
    BuiltInCheck {
        selector: "title",
        label: "Page <title>",
    },
    BuiltInCheck {
        selector: r#"meta[name="description"]"#,
        label: "Meta description",
    },
    BuiltInCheck {
        selector: r#"link[rel="canonical"]"#,
        label: "Canonical link",
    },
    BuiltInCheck {
        selector: r#"meta[property="og:title"]"#,
        label: "Open Graph title",
    },
    BuiltInCheck {
        selector: "h1",
        label: "H1 present",
    },
];

/// Elements likely rendered above the fold.
pub const ABOVE_FOLD_SELECTOR_STR: &str = "h1, header, nav, .hero, .header, .nav";

/// Inline-style fragments that mark an element as hidden.
///
/// Matched as plain substrings of the lowercased `style` attribute, so
/// `opacity: 0` (with a space) is not detected.
pub const HIDDEN_STYLE_MARKERS: &[&str] = &["display:none", "visibility:hidden", "opacity:0"];

/// Maximum number of characters kept from a hidden element's outer markup.
pub const HIDDEN_SNIPPET_MAX_CHARS: usize = 120;

/// Selector prefixes that can be resolved against the markup index.
pub const ID_PREFIX: char = '#';
pub const CLASS_PREFIX: char = '.';
pub const DATA_ATTRIBUTE_PREFIX: &str = "[data-";
