//! Table-level and per-variable statistics

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::samples::format_cell;

/// Number of histogram bins for numeric variables
const HISTOGRAM_BINS: usize = 10;

/// Cap on the frequency list for categorical variables
const MAX_CATEGORY_ROWS: usize = 10;

/// Inferred variable kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Numeric,
    Categorical,
    Boolean,
}

/// Infer the variable kind from the column dtype
pub fn infer_kind(dtype: &DataType) -> VariableKind {
    if matches!(dtype, DataType::Boolean) {
        VariableKind::Boolean
    } else if dtype.is_primitive_numeric() {
        VariableKind::Numeric
    } else {
        VariableKind::Categorical
    }
}

/// Dataset-wide statistics shown in the report overview
#[derive(Debug, Clone, Serialize)]
pub struct TableStats {
    pub rows: usize,
    pub columns: usize,
    pub missing_cells: usize,
    pub missing_ratio: f64,
    pub duplicate_rows: usize,
    pub estimated_size_bytes: usize,
    pub numeric_count: usize,
    pub categorical_count: usize,
    pub boolean_count: usize,
}

/// Histogram over a numeric variable
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    /// Bin edges, one more than `counts`
    pub edges: Vec<f64>,
    pub counts: Vec<u32>,
}

/// Summary statistics for a numeric variable
#[derive(Debug, Clone, Serialize)]
pub struct NumericStats {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub zeros: usize,
    pub histogram: Histogram,
}

/// One row of a categorical frequency list
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Per-variable summary
#[derive(Debug, Clone, Serialize)]
pub struct VariableSummary {
    pub name: String,
    pub kind: VariableKind,
    pub count: usize,
    pub missing: usize,
    pub missing_ratio: f64,
    pub distinct: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoryCount>>,
}

/// Cast a column to f64 and collect its values, keeping nulls.
///
/// Returns None for non-numeric columns.
pub(crate) fn column_f64_values(col: &Column) -> Option<Vec<Option<f64>>> {
    if !col.dtype().is_primitive_numeric() {
        return None;
    }
    let casted = col.cast(&DataType::Float64).ok()?;
    let ca = casted.f64().ok()?;
    Some(ca.iter().collect())
}

/// Compute dataset-wide statistics.
pub fn compute_table_stats(df: &DataFrame) -> TableStats {
    let (rows, columns) = df.shape();

    let mut missing_cells = 0usize;
    let mut numeric_count = 0usize;
    let mut categorical_count = 0usize;
    let mut boolean_count = 0usize;

    for col in df.get_columns() {
        missing_cells += col.null_count();
        match infer_kind(col.dtype()) {
            VariableKind::Numeric => numeric_count += 1,
            VariableKind::Categorical => categorical_count += 1,
            VariableKind::Boolean => boolean_count += 1,
        }
    }

    let total_cells = rows * columns;
    let missing_ratio = if total_cells > 0 {
        missing_cells as f64 / total_cells as f64
    } else {
        0.0
    };

    TableStats {
        rows,
        columns,
        missing_cells,
        missing_ratio,
        duplicate_rows: count_duplicate_rows(df),
        estimated_size_bytes: df.estimated_size(),
        numeric_count,
        categorical_count,
        boolean_count,
    }
}

/// Count rows that repeat an earlier row exactly (string-rendered cells).
fn count_duplicate_rows(df: &DataFrame) -> usize {
    let rows = df.height();
    if rows == 0 {
        return 0;
    }

    let rendered: Vec<Vec<String>> = df
        .get_columns()
        .iter()
        .map(|col| {
            col.as_materialized_series()
                .iter()
                .map(|av| format_cell(&av))
                .collect()
        })
        .collect();

    let mut seen: HashSet<String> = HashSet::with_capacity(rows);
    let mut duplicates = 0usize;
    for row_idx in 0..rows {
        let key = rendered
            .iter()
            .map(|col| col[row_idx].as_str())
            .collect::<Vec<_>>()
            .join("\u{1f}");
        if !seen.insert(key) {
            duplicates += 1;
        }
    }
    duplicates
}

/// Summarize every column of the dataset.
pub fn summarize_variables(df: &DataFrame) -> Result<Vec<VariableSummary>> {
    let rows = df.height();
    let mut summaries = Vec::with_capacity(df.width());

    for col in df.get_columns() {
        let kind = infer_kind(col.dtype());
        let missing = col.null_count();
        let count = rows - missing;
        let missing_ratio = if rows > 0 {
            missing as f64 / rows as f64
        } else {
            0.0
        };
        // n_unique counts null as a value of its own; report non-null distincts
        let unique = col.as_materialized_series().n_unique()?;
        let distinct = if missing > 0 { unique - 1 } else { unique };

        let numeric = if kind == VariableKind::Numeric {
            column_f64_values(col).and_then(|values| numeric_stats(&values))
        } else {
            None
        };

        let categories = if kind != VariableKind::Numeric {
            Some(category_counts(col))
        } else {
            None
        };

        summaries.push(VariableSummary {
            name: col.name().to_string(),
            kind,
            count,
            missing,
            missing_ratio,
            distinct,
            numeric,
            categories,
        });
    }

    Ok(summaries)
}

/// Summary statistics over the non-null values of a numeric column.
fn numeric_stats(values: &[Option<f64>]) -> Option<NumericStats> {
    let mut present: Vec<f64> = values.iter().filter_map(|v| *v).collect();
    if present.is_empty() {
        return None;
    }
    present.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = present.len();
    let mean = present.iter().sum::<f64>() / n as f64;
    let std = if n > 1 {
        let ss: f64 = present.iter().map(|v| (v - mean) * (v - mean)).sum();
        (ss / (n - 1) as f64).sqrt()
    } else {
        0.0
    };
    let zeros = present.iter().filter(|v| **v == 0.0).count();

    Some(NumericStats {
        mean,
        std,
        min: present[0],
        q1: sorted_quantile(&present, 0.25),
        median: sorted_quantile(&present, 0.5),
        q3: sorted_quantile(&present, 0.75),
        max: present[n - 1],
        zeros,
        histogram: build_histogram(&present),
    })
}

/// Linear-interpolated quantile over an ascending slice.
fn sorted_quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

/// Equal-width histogram over the non-null values.
fn build_histogram(sorted: &[f64]) -> Histogram {
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    if min == max {
        // Degenerate range: a single bin holding everything
        return Histogram {
            edges: vec![min, max],
            counts: vec![sorted.len() as u32],
        };
    }

    let width = (max - min) / HISTOGRAM_BINS as f64;
    let edges: Vec<f64> = (0..=HISTOGRAM_BINS).map(|i| min + width * i as f64).collect();
    let mut counts = vec![0u32; HISTOGRAM_BINS];
    for &v in sorted {
        let mut bin = ((v - min) / width) as usize;
        if bin >= HISTOGRAM_BINS {
            bin = HISTOGRAM_BINS - 1; // max value lands in the last bin
        }
        counts[bin] += 1;
    }

    Histogram { edges, counts }
}

/// Frequency list for a categorical or boolean column, capped and sorted by
/// count descending (name ascending on ties).
fn category_counts(col: &Column) -> Vec<CategoryCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for av in col.as_materialized_series().iter() {
        if av.is_null() {
            continue;
        }
        *counts.entry(format_cell(&av)).or_insert(0) += 1;
    }

    let mut list: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(value, count)| CategoryCount { value, count })
        .collect();
    list.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    list.truncate(MAX_CATEGORY_ROWS);
    list
}
