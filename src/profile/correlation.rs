//! Correlation matrices over the numeric variables
//!
//! Three coefficients: Pearson (single-pass Welford), Spearman (average
//! ranks, then Pearson) and Kendall tau-b (pairwise concordance with tie
//! correction). Null entries are skipped pairwise. Constant columns have no
//! defined coefficient and produce empty matrix cells.

use anyhow::Result;
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use super::stats::column_f64_values;

/// Correlation coefficient selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationMethod {
    Pearson,
    Spearman,
    KendallTau,
}

impl CorrelationMethod {
    pub fn label(&self) -> &'static str {
        match self {
            CorrelationMethod::Pearson => "pearson",
            CorrelationMethod::Spearman => "spearman",
            CorrelationMethod::KendallTau => "kendall",
        }
    }
}

/// A square correlation matrix; `values[i][j]` is the coefficient between
/// `columns[i]` and `columns[j]`, or None where it is undefined.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub method: String,
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

/// Compute the correlation matrix over the numeric columns.
///
/// Returns None when fewer than two numeric columns exist. Pairs are
/// fanned out with rayon; each pair only considers rows where both values
/// are present.
pub fn correlation_matrix(
    df: &DataFrame,
    method: CorrelationMethod,
) -> Result<Option<CorrelationMatrix>> {
    let numeric: Vec<(String, Vec<Option<f64>>)> = df
        .get_columns()
        .iter()
        .filter_map(|col| column_f64_values(col).map(|vals| (col.name().to_string(), vals)))
        .collect();

    let n = numeric.len();
    if n < 2 {
        return Ok(None);
    }

    // Upper triangle plus diagonal
    let pairs: Vec<(usize, usize)> = (0..n).flat_map(|i| (i..n).map(move |j| (i, j))).collect();

    let coefficients: Vec<((usize, usize), Option<f64>)> = pairs
        .par_iter()
        .map(|&(i, j)| ((i, j), coefficient(method, &numeric[i].1, &numeric[j].1)))
        .collect();

    let mut values = vec![vec![None; n]; n];
    for ((i, j), c) in coefficients {
        values[i][j] = c;
        values[j][i] = c;
    }

    Ok(Some(CorrelationMatrix {
        method: method.label().to_string(),
        columns: numeric.into_iter().map(|(name, _)| name).collect(),
        values,
    }))
}

fn coefficient(method: CorrelationMethod, xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let (x, y) = complete_pairs(xs, ys);
    if x.len() < 2 {
        return None;
    }
    match method {
        CorrelationMethod::Pearson => pearson_complete(&x, &y),
        CorrelationMethod::Spearman => pearson_complete(&average_ranks(&x), &average_ranks(&y)),
        CorrelationMethod::KendallTau => kendall_tau_b(&x, &y),
    }
}

/// Keep only the rows where both values are present.
fn complete_pairs(xs: &[Option<f64>], ys: &[Option<f64>]) -> (Vec<f64>, Vec<f64>) {
    let mut x = Vec::with_capacity(xs.len());
    let mut y = Vec::with_capacity(ys.len());
    for (a, b) in xs.iter().zip(ys.iter()) {
        if let (Some(a), Some(b)) = (a, b) {
            x.push(*a);
            y.push(*b);
        }
    }
    (x, y)
}

/// Pearson correlation via a single-pass Welford update.
///
/// Returns None when either side has zero variance.
pub(crate) fn pearson_complete(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len();
    if n < 2 || n != ys.len() {
        return None;
    }

    let mut count = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (&x, &y) in xs.iter().zip(ys.iter()) {
        count += 1.0;
        let dx = x - mean_x;
        let dy = y - mean_y;
        mean_x += dx / count;
        mean_y += dy / count;
        var_x += dx * (x - mean_x);
        var_y += dy * (y - mean_y);
        cov_xy += dx * (y - mean_y);
    }

    let std_x = (var_x / count).sqrt();
    let std_y = (var_y / count).sqrt();
    if std_x == 0.0 || std_y == 0.0 {
        return None;
    }

    Some(cov_xy / (count * std_x * std_y))
}

/// Average ranks (1-based), ties receive the mean of their positions.
fn average_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        // Positions i..=j hold the same value
        let rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = rank;
        }
        i = j + 1;
    }
    ranks
}

/// Kendall tau-b with tie correction.
fn kendall_tau_b(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len();
    let mut concordant = 0i64;
    let mut discordant = 0i64;
    let mut ties_x = 0i64;
    let mut ties_y = 0i64;

    for i in 0..n {
        for j in (i + 1)..n {
            let dx = xs[i] - xs[j];
            let dy = ys[i] - ys[j];
            if dx == 0.0 && dy == 0.0 {
                // Tied in both; contributes to neither denominator term
                continue;
            } else if dx == 0.0 {
                ties_x += 1;
            } else if dy == 0.0 {
                ties_y += 1;
            } else if dx * dy > 0.0 {
                concordant += 1;
            } else {
                discordant += 1;
            }
        }
    }

    let denom_x = (concordant + discordant + ties_x) as f64;
    let denom_y = (concordant + discordant + ties_y) as f64;
    if denom_x == 0.0 || denom_y == 0.0 {
        return None;
    }

    Some((concordant - discordant) as f64 / (denom_x * denom_y).sqrt())
}
