//! Rhoscope: Data Profiling Library
//!
//! Profiles a bundled tabular dataset (per-variable statistics,
//! missing-value diagrams, correlation matrices, interactions, samples)
//! and renders the result as a self-contained HTML report, suitable for
//! saving to disk or embedding behind a sandboxed data-URI iframe.

pub mod cli;
pub mod dataset;
pub mod profile;
pub mod report;
pub mod utils;
