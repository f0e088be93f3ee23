//! BEM class-name validation.

use std::sync::LazyLock;

use regex::Regex;

// block[__element][--modifier]; each segment lowercase alphanumeric words joined by single hyphens
static BEM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-z0-9]+(?:-[a-z0-9]+)*(?:__[a-z0-9]+(?:-[a-z0-9]+)*)?(?:--[a-z0-9]+(?:-[a-z0-9]+)*)?$",
    )
    .unwrap_or_else(|e| panic!("Failed to compile BEM pattern: {}. This is a programming error.", e))
});

/// Checks a bare class name (without the leading `.`) against BEM.
pub fn is_valid_bem(class_name: &str) -> bool {
    BEM_PATTERN.is_match(class_name)
}
