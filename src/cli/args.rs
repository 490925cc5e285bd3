//! Command-line argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::profile::ProfileConfig;
use crate::report::REPORT_FILE_NAME;

/// Environment variable probed by `--mode auto` to detect a hosting
/// dashboard session.
pub const DASHBOARD_ENV: &str = "RHOSCOPE_DASHBOARD";

/// Rhoscope - profile the bundled dataset into a self-contained HTML report
#[derive(Parser, Debug)]
#[command(name = "rhoscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Execution mode. `script` saves the report and opens a browser;
    /// `dashboard` prints a host page embedding the report in a sandboxed
    /// data-URI iframe; `auto` probes the environment once at startup.
    #[arg(long, value_enum, default_value_t = Mode::Auto)]
    pub mode: Mode,

    /// Report output path (script mode). Overwritten on each run.
    #[arg(short, long, default_value = REPORT_FILE_NAME)]
    pub output: PathBuf,

    /// Report title
    #[arg(long, default_value = "Data Profile")]
    pub title: String,

    /// Skip correlations and interactions for a faster, smaller report
    #[arg(long, default_value = "false")]
    pub minimal: bool,

    /// Rows shown in the head sample
    #[arg(long, default_value = "10", value_parser = validate_sample_rows)]
    pub head: usize,

    /// Rows shown in the tail sample
    #[arg(long, default_value = "10", value_parser = validate_sample_rows)]
    pub tail: usize,

    /// Do not launch the browser after saving (script mode)
    #[arg(long, default_value = "false")]
    pub no_open: bool,
}

impl Cli {
    /// Build the profiling configuration from the parsed arguments.
    pub fn profile_config(&self) -> ProfileConfig {
        let mut config = if self.minimal {
            ProfileConfig::minimal(self.title.clone())
        } else {
            ProfileConfig {
                title: self.title.clone(),
                ..Default::default()
            }
        };
        config.head = self.head;
        config.tail = self.tail;
        config
    }
}

/// Execution mode, resolved exactly once at startup
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Probe for a hosting dashboard session; fall back to script mode
    Auto,
    /// Save the report to a file and open it in the default browser
    Script,
    /// Emit a host page embedding the report as a data-URI iframe
    Dashboard,
}

impl Mode {
    /// Collapse `Auto` into a concrete mode. The probe reads the
    /// environment and nothing else, so repeated calls agree; a probe that
    /// cannot find a session means script mode, never an error.
    pub fn resolve(self) -> Mode {
        match self {
            Mode::Auto => {
                if dashboard_session_active() {
                    Mode::Dashboard
                } else {
                    Mode::Script
                }
            }
            other => other,
        }
    }
}

/// Whether a hosting dashboard session advertised itself in the
/// environment. Unset, empty and "0" all mean no session.
pub fn dashboard_session_active() -> bool {
    std::env::var(DASHBOARD_ENV)
        .map(|v| !v.is_empty() && v != "0")
        .unwrap_or(false)
}

/// Validator for the head/tail sample sizes
fn validate_sample_rows(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid row count", s))?;

    if value == 0 || value > 1000 {
        Err(format!(
            "sample rows must be between 1 and 1000, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}
