//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `selector_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading the markup and script inputs
//! - Report printing and the exit code policy
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, IsTerminal};
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;

use selector_audit::app::{
    both_from_stdin, config_from_opt, evaluate_exit_code, log_finding_statistics, read_input,
};
use selector_audit::config::Opt;
use selector_audit::export::{print_report, ExportOptions};
use selector_audit::initialization::init_logger_with;
use selector_audit::run_checks;

fn run(opt: &Opt) -> Result<i32> {
    if both_from_stdin(opt.html.as_deref(), opt.script.as_deref()) {
        bail!("--html and --script cannot both read from stdin");
    }

    let config = config_from_opt(opt).context("Failed to load configuration")?;
    let markup = read_input(opt.html.as_deref()).context("Failed to read markup")?;
    let script = read_input(opt.script.as_deref()).context("Failed to read script")?;

    let report = run_checks(&markup, &script, &config);
    log_finding_statistics(&report.findings);

    let export = ExportOptions {
        format: opt.format,
        severity: opt.severity,
        color: io::stdout().is_terminal(),
    };
    print_report(&report, &export).context("Failed to write report")?;

    Ok(evaluate_exit_code(opt.fail_on, &report.findings))
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(&opt) {
        Ok(0) => Ok(()),
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("selector_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
