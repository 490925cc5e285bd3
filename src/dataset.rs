//! Bundled example dataset
//!
//! The profiler ships its own data: a passenger manifest compiled into the
//! binary. There is no input path, no network fetch and no schema
//! validation. The `alive` column is a string duplicate of `survived` and
//! is dropped before profiling, so it never dilutes the correlation and
//! interaction sections.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::io::Cursor;

/// CSV source compiled into the binary.
const MANIFEST_CSV: &str = include_str!("../data/titanic.csv");

/// Column removed at load time.
const DROPPED_COLUMN: &str = "alive";

/// Parse the bundled dataset into an eager DataFrame.
///
/// Read-only after construction; callers share it for the process lifetime.
pub fn load_bundled_dataset() -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(500))
        .with_rechunk(true)
        .into_reader_with_file_handle(Cursor::new(MANIFEST_CSV.as_bytes()))
        .finish()
        .context("Failed to parse the bundled dataset")?;

    let df = df
        .drop(DROPPED_COLUMN)
        .context("Bundled dataset is missing its expected columns")?;

    Ok(df)
}

/// Shape and memory figures for the terminal summary.
pub fn dataset_stats(df: &DataFrame) -> (usize, usize, f64) {
    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    (rows, cols, memory_mb)
}
