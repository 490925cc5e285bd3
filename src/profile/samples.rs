//! Head/tail row samples for the report's Sample section

use polars::prelude::*;
use serde::Serialize;

/// First and last rows of the dataset, rendered as strings
#[derive(Debug, Clone, Serialize)]
pub struct SampleSection {
    pub columns: Vec<String>,
    pub head: Vec<Vec<String>>,
    pub tail: Vec<Vec<String>>,
}

/// Render a single cell. Nulls render as the empty string, strings without
/// the quotes polars adds in its own display.
pub(crate) fn format_cell(av: &AnyValue) -> String {
    match av {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Extract the first `head` and last `tail` rows.
///
/// The two windows may overlap on tiny datasets; rows are never fabricated.
pub fn extract_samples(df: &DataFrame, head: usize, tail: usize) -> SampleSection {
    let rows = df.height();
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let head_rows = head.min(rows);
    let tail_rows = tail.min(rows);

    SampleSection {
        columns,
        head: render_rows(df, 0, head_rows),
        tail: render_rows(df, rows - tail_rows, tail_rows),
    }
}

fn render_rows(df: &DataFrame, offset: usize, len: usize) -> Vec<Vec<String>> {
    let cells: Vec<Vec<String>> = df
        .get_columns()
        .iter()
        .map(|col| {
            col.as_materialized_series()
                .slice(offset as i64, len)
                .iter()
                .map(|av| format_cell(&av))
                .collect()
        })
        .collect();

    (0..len)
        .map(|row| cells.iter().map(|col| col[row].clone()).collect())
        .collect()
}
