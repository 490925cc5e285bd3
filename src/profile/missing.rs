//! Missing-data analysis: bar, matrix and heatmap diagrams

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;

use super::correlation::pearson_complete;

/// Cap on the number of rows sampled into the nullity matrix
const MATRIX_SAMPLE_ROWS: usize = 60;

/// Missing count and ratio for one column
#[derive(Debug, Clone, Serialize)]
pub struct MissingBarEntry {
    pub name: String,
    pub missing: usize,
    pub ratio: f64,
}

/// Downsampled row-nullity grid: `rows[r][c]` is true where the value is
/// present in sampled row `r`, column `c`.
#[derive(Debug, Clone, Serialize)]
pub struct NullityMatrix {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<bool>>,
    pub sampled_rows: usize,
    pub total_rows: usize,
}

/// Nullity correlation between columns that have any missing values
#[derive(Debug, Clone, Serialize)]
pub struct NullityHeatmap {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

/// The missing-data section of the report
#[derive(Debug, Clone, Serialize)]
pub struct MissingReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar: Option<Vec<MissingBarEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<NullityMatrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heatmap: Option<NullityHeatmap>,
}

/// Per-column missing counts, sorted by ratio descending.
pub fn missing_bar(df: &DataFrame) -> Vec<MissingBarEntry> {
    let rows = df.height();
    let mut entries: Vec<MissingBarEntry> = df
        .get_columns()
        .iter()
        .map(|col| {
            let missing = col.null_count();
            MissingBarEntry {
                name: col.name().to_string(),
                missing,
                ratio: if rows > 0 {
                    missing as f64 / rows as f64
                } else {
                    0.0
                },
            }
        })
        .collect();

    entries.sort_by(|a, b| b.ratio.partial_cmp(&a.ratio).unwrap_or(std::cmp::Ordering::Equal));
    entries
}

/// Evenly downsampled presence grid across all columns.
pub fn nullity_matrix(df: &DataFrame) -> NullityMatrix {
    let total_rows = df.height();
    let sampled_rows = total_rows.min(MATRIX_SAMPLE_ROWS);

    // Evenly spaced row picks over the full height
    let picks: Vec<usize> = if sampled_rows == 0 {
        Vec::new()
    } else {
        (0..sampled_rows)
            .map(|i| i * total_rows / sampled_rows)
            .collect()
    };

    let presence: Vec<Vec<bool>> = df
        .get_columns()
        .iter()
        .map(|col| {
            let series = col.as_materialized_series();
            let nulls: Vec<bool> = series.iter().map(|av| av.is_null()).collect();
            picks.iter().map(|&r| !nulls[r]).collect()
        })
        .collect();

    let rows = (0..picks.len())
        .map(|r| presence.iter().map(|col| col[r]).collect())
        .collect();

    NullityMatrix {
        columns: df.get_column_names().iter().map(|s| s.to_string()).collect(),
        rows,
        sampled_rows,
        total_rows,
    }
}

/// Pearson correlation between the null-indicator vectors of every pair of
/// columns that have at least one missing value.
///
/// Returns None when fewer than two columns qualify.
pub fn nullity_heatmap(df: &DataFrame) -> Result<Option<NullityHeatmap>> {
    let indicators: Vec<(String, Vec<f64>)> = df
        .get_columns()
        .iter()
        .filter(|col| col.null_count() > 0)
        .map(|col| {
            let vec: Vec<f64> = col
                .as_materialized_series()
                .iter()
                .map(|av| if av.is_null() { 1.0 } else { 0.0 })
                .collect();
            (col.name().to_string(), vec)
        })
        .collect();

    let n = indicators.len();
    if n < 2 {
        return Ok(None);
    }

    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        for j in i..n {
            let c = pearson_complete(&indicators[i].1, &indicators[j].1);
            values[i][j] = c;
            values[j][i] = c;
        }
    }

    Ok(Some(NullityHeatmap {
        columns: indicators.into_iter().map(|(name, _)| name).collect(),
        values,
    }))
}
