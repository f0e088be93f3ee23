//! SEO feature detection.
//!
//! This module extracts SEO-relevant data from a parsed document:
//! - Structured data (JSON-LD, microdata, RDFa types)
//! - The critical-element checklist (built-ins plus configured selectors)
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod critical;
mod structured;

use scraper::Html;
use serde::Serialize;

// Re-export public API
pub use critical::{check_critical_elements, CriticalElementCheck};
pub use structured::{
    extract_json_ld, extract_microdata_types, extract_rdfa_types, StructuredDataRecord,
};

/// Everything the SEO detector found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeoReport {
    /// Critical-element checklist, built-ins first
    pub critical: Vec<CriticalElementCheck>,
    /// JSON-LD records
    pub jsonld: Vec<StructuredDataRecord>,
    /// Distinct microdata types
    pub microdata: Vec<String>,
    /// Distinct RDFa types
    pub rdfa: Vec<String>,
}

impl SeoReport {
    /// Number of critical checks that found nothing.
    pub fn missing_critical(&self) -> usize {
        self.critical.iter().filter(|c| !c.present).count()
    }
}

/// Runs every SEO detector over a parsed document.
pub fn detect_seo_features(document: &Html, critical_selectors: &[String]) -> SeoReport {
    let report = SeoReport {
        critical: check_critical_elements(document, critical_selectors),
        jsonld: extract_json_ld(document),
        microdata: extract_microdata_types(document),
        rdfa: extract_rdfa_types(document),
    };

    log::debug!(
        "SEO: {}/{} critical element(s) missing, {} JSON-LD record(s), {} microdata type(s), {} RDFa type(s)",
        report.missing_critical(),
        report.critical.len(),
        report.jsonld.len(),
        report.microdata.len(),
        report.rdfa.len()
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_seo_features_empty_document() {
        let document = Html::parse_document("");
        let report = detect_seo_features(&document, &[]);
        assert_eq!(report.critical.len(), 5);
        assert_eq!(report.missing_critical(), 5);
        assert!(report.jsonld.is_empty());
        assert!(report.microdata.is_empty());
        assert!(report.rdfa.is_empty());
    }

    #[test]
    fn test_detect_seo_features_critical_count_tracks_config() {
        let document = Html::parse_document("<main></main>");
        let configured = vec!["main".to_string(), "footer".to_string()];
        let report = detect_seo_features(&document, &configured);
        assert_eq!(report.critical.len(), 5 + configured.len());
        assert_eq!(report.missing_critical(), 6);
    }

    #[test]
    fn test_seo_report_serializes_spec_shape() {
        let document = Html::parse_document(
            r#"<script type="application/ld+json">{"@type": "Product"}</script>"#,
        );
        let json = serde_json::to_value(detect_seo_features(&document, &[])).expect("serialize");
        assert_eq!(json["jsonld"][0]["typeName"], "Product");
        assert_eq!(json["critical"][0]["label"], "Page <title>");
        assert_eq!(json["critical"][0]["present"], false);
        assert!(json["microdata"].as_array().is_some());
        assert!(json["rdfa"].as_array().is_some());
    }
}
