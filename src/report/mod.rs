//! Report module - building, caching, embedding and saving the HTML report

pub mod embed;
pub mod html;
pub mod summary;

pub use embed::{
    open_in_browser, render_host_page, report_data_uri, save_report, EMBED_FRAME_HEIGHT,
    REPORT_FILE_NAME,
};
pub use html::render_html;

use anyhow::Result;
use polars::prelude::DataFrame;
use std::sync::OnceLock;

use crate::profile::{ProfileConfig, ProfileReport};
use crate::utils::silenced;

/// Profile the dataset and render the report HTML.
///
/// The whole build runs with stdout/stderr suppressed: the compute layer
/// can emit warnings directly to the terminal and none of that belongs in
/// this tool's output. Errors propagate unchanged once the streams are
/// restored. No retry, no partial result: a complete document or an error.
pub fn build_report_html(df: &DataFrame, config: &ProfileConfig) -> Result<String> {
    silenced(|| {
        let report = ProfileReport::generate(df, config)?;
        render_html(&report)
    })
}

/// Single-entry memo for the report HTML.
///
/// Dataset and configuration never change for the process lifetime, so the
/// cache has no key and no eviction: the first successful build is returned
/// to every later caller, and the builder runs at most once per success.
pub struct ProfileCache {
    cell: OnceLock<String>,
}

impl ProfileCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Return the cached HTML, building it on first use. A failed build
    /// leaves the cache empty so the error surfaces to the caller.
    pub fn get_or_build(&self, build: impl FnOnce() -> Result<String>) -> Result<&str> {
        if let Some(html) = self.cell.get() {
            return Ok(html);
        }
        let html = build()?;
        Ok(self.cell.get_or_init(|| html))
    }
}

impl Default for ProfileCache {
    fn default() -> Self {
        Self::new()
    }
}
