//! Finding type definitions.

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIterMacro)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule categories, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIterMacro)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// Script references a selector the markup does not contain
    SelectorMismatch,
    /// A critical SEO element is missing
    SeoCriticalMissing,
    /// No JSON-LD record at all
    JsonldMissing,
    /// An identifier is used by more than one element
    DuplicateId,
    /// A class token does not follow BEM
    NamingBem,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::SelectorMismatch => "selector-mismatch",
            RuleId::SeoCriticalMissing => "seo-critical-missing",
            RuleId::JsonldMissing => "jsonld-missing",
            RuleId::DuplicateId => "duplicate-id",
            RuleId::NamingBem => "naming-bem",
        }
    }

    /// Severity every finding of this rule carries.
    pub fn severity(&self) -> Severity {
        match self {
            RuleId::SelectorMismatch | RuleId::SeoCriticalMissing | RuleId::DuplicateId => {
                Severity::Error
            }
            RuleId::JsonldMissing => Severity::Warn,
            RuleId::NamingBem => Severity::Info,
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub rule_id: RuleId,
    pub severity: Severity,
    /// What kind of thing the finding is about (`css`, `seo`, `id`, `class`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    /// The selector, identifier, or class concerned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    pub message: String,
    /// Originating script snippet, for selector mismatches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl Finding {
    /// Creates a finding with the rule's severity and no target or snippet.
    pub fn new(rule_id: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity: rule_id.severity(),
            target_type: None,
            target_name: None,
            message: message.into(),
            snippet: None,
        }
    }

    pub fn with_target(mut self, target_type: &str, target_name: impl Into<String>) -> Self {
        self.target_type = Some(target_type.to_string());
        self.target_name = Some(target_name.into());
        self
    }

    pub fn with_target_type(mut self, target_type: &str) -> Self {
        self.target_type = Some(target_type.to_string());
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}
