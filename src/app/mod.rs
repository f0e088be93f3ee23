//! Command-line application support.
//!
//! This module provides input reading, configuration assembly from CLI
//! options, exit code policy, and finding statistics used by the binary.

pub mod input;
pub mod statistics;

use std::path::Path;

use crate::config::{load_config, parse_selector_list, FailOn, Opt, ScanConfig};
use crate::error_handling::InputError;
use crate::rules::{Finding, Severity};

// Re-export public API
pub use input::{read_input, STDIN_PATH};
pub use statistics::log_finding_statistics;

/// Builds the scan configuration from CLI options.
///
/// Starts from the `--config` snapshot (or defaults), then applies flag
/// overrides. `--critical-selectors` entries are appended after the
/// configured ones.
pub fn config_from_opt(opt: &Opt) -> Result<ScanConfig, InputError> {
    let mut config = match opt.config.as_deref() {
        Some(path) => load_config(path)?,
        None => ScanConfig::default(),
    };

    if opt.enforce_bem {
        config.naming.enforce_bem = true;
    }
    if let Some(list) = opt.critical_selectors.as_deref() {
        config
            .seo
            .critical_selectors
            .extend(parse_selector_list(list));
    }
    if opt.no_duplicate_ids {
        config.ids.report_duplicates = false;
    }

    Ok(config)
}

/// Maps the scan outcome to a process exit code.
///
/// - `0`: policy satisfied
/// - `2`: findings at or above the policy threshold
pub fn evaluate_exit_code(fail_on: FailOn, findings: &[Finding]) -> i32 {
    let failing = match fail_on {
        FailOn::Never => false,
        FailOn::Errors => findings.iter().any(|f| f.severity == Severity::Error),
        FailOn::Warnings => findings
            .iter()
            .any(|f| matches!(f.severity, Severity::Error | Severity::Warn)),
    };
    if failing {
        2
    } else {
        0
    }
}

/// Whether both inputs would be read from stdin.
pub fn both_from_stdin(html: Option<&Path>, script: Option<&Path>) -> bool {
    let is_stdin = |p: Option<&Path>| p.is_some_and(|p| p == Path::new(STDIN_PATH));
    is_stdin(html) && is_stdin(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleId;
    use clap::Parser;
    use std::io::Write;
    use std::path::PathBuf;

    fn opt(args: &[&str]) -> Opt {
        let mut argv = vec!["selector_audit"];
        argv.extend_from_slice(args);
        Opt::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn test_config_from_opt_defaults() {
        let config = config_from_opt(&opt(&[])).expect("config");
        assert_eq!(config, ScanConfig::default());
    }

    #[test]
    fn test_config_from_opt_flag_overrides() {
        let config = config_from_opt(&opt(&[
            "--enforce-bem",
            "--no-duplicate-ids",
            "--critical-selectors",
            "main, footer ,",
        ]))
        .expect("config");
        assert!(config.naming.enforce_bem);
        assert!(!config.ids.report_duplicates);
        assert_eq!(
            config.seo.critical_selectors,
            vec!["main".to_string(), "footer".to_string()]
        );
    }

    #[test]
    fn test_config_from_opt_appends_to_file_selectors() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"seo": {{"criticalSelectors": ["nav"]}}}}"#).expect("write");
        let path = file.path().to_string_lossy().to_string();

        let config = config_from_opt(&opt(&["--config", path.as_str(), "--critical-selectors", "footer"]))
            .expect("config");
        assert_eq!(
            config.seo.critical_selectors,
            vec!["nav".to_string(), "footer".to_string()]
        );
    }

    #[test]
    fn test_config_from_opt_missing_file() {
        let result = config_from_opt(&opt(&["--config", "/definitely/not/here.json"]));
        assert!(matches!(result, Err(InputError::Read { .. })));
    }

    #[test]
    fn test_evaluate_exit_code() {
        let error = Finding::new(RuleId::DuplicateId, "dup");
        let warn = Finding::new(RuleId::JsonldMissing, "none");
        let info = Finding::new(RuleId::NamingBem, "bem");

        assert_eq!(evaluate_exit_code(FailOn::Never, &[error.clone()]), 0);
        assert_eq!(evaluate_exit_code(FailOn::Errors, &[error.clone()]), 2);
        assert_eq!(evaluate_exit_code(FailOn::Errors, &[warn.clone(), info.clone()]), 0);
        assert_eq!(evaluate_exit_code(FailOn::Warnings, &[warn]), 2);
        assert_eq!(evaluate_exit_code(FailOn::Warnings, &[info]), 0);
        assert_eq!(evaluate_exit_code(FailOn::Warnings, &[]), 0);
    }

    #[test]
    fn test_both_from_stdin() {
        let dash = PathBuf::from("-");
        let file = PathBuf::from("page.html");
        assert!(both_from_stdin(Some(&dash), Some(&dash)));
        assert!(!both_from_stdin(Some(&dash), Some(&file)));
        assert!(!both_from_stdin(None, Some(&dash)));
    }
}
