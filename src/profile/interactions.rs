//! Pairwise interaction scatter data for continuous variables

use polars::prelude::*;
use serde::Serialize;

use super::stats::column_f64_values;

/// Cap on scatter points per interaction plot
const MAX_SCATTER_POINTS: usize = 500;

/// Continuous variables with fewer distinct values than this are treated as
/// discrete codes and skipped in the interaction grid.
const MIN_DISTINCT_FOR_CONTINUOUS: usize = 8;

/// One scatter plot of the interaction grid
#[derive(Debug, Clone, Serialize)]
pub struct InteractionPlot {
    pub x: String,
    pub y: String,
    pub points: Vec<(f64, f64)>,
}

/// Build scatter data for every unordered pair of continuous variables.
///
/// Rows where either side is null are dropped; the remainder is evenly
/// downsampled to at most `MAX_SCATTER_POINTS` points.
pub fn continuous_interactions(df: &DataFrame) -> Vec<InteractionPlot> {
    let continuous: Vec<(String, Vec<Option<f64>>)> = df
        .get_columns()
        .iter()
        .filter_map(|col| {
            let values = column_f64_values(col)?;
            let distinct = col.as_materialized_series().n_unique().ok()?;
            if distinct >= MIN_DISTINCT_FOR_CONTINUOUS {
                Some((col.name().to_string(), values))
            } else {
                None
            }
        })
        .collect();

    let mut plots = Vec::new();
    for i in 0..continuous.len() {
        for j in (i + 1)..continuous.len() {
            let (ref x_name, ref xs) = continuous[i];
            let (ref y_name, ref ys) = continuous[j];

            let complete: Vec<(f64, f64)> = xs
                .iter()
                .zip(ys.iter())
                .filter_map(|(x, y)| match (x, y) {
                    (Some(x), Some(y)) => Some((*x, *y)),
                    _ => None,
                })
                .collect();

            if complete.is_empty() {
                continue;
            }

            plots.push(InteractionPlot {
                x: x_name.clone(),
                y: y_name.clone(),
                points: downsample(complete),
            });
        }
    }
    plots
}

fn downsample(points: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    if points.len() <= MAX_SCATTER_POINTS {
        return points;
    }
    (0..MAX_SCATTER_POINTS)
        .map(|i| points[i * points.len() / MAX_SCATTER_POINTS])
        .collect()
}
