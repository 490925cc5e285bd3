//! CLI module - argument parsing and mode resolution

mod args;

pub use args::{dashboard_session_active, Cli, Mode, DASHBOARD_ENV};
