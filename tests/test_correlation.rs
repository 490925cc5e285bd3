//! Unit tests for the correlation matrices

use polars::prelude::*;
use rhoscope::profile::correlation::{correlation_matrix, CorrelationMethod};

#[path = "common/mod.rs"]
mod common;

fn cell(
    matrix: &rhoscope::profile::CorrelationMatrix,
    a: &str,
    b: &str,
) -> Option<f64> {
    let i = matrix.columns.iter().position(|c| c == a).unwrap();
    let j = matrix.columns.iter().position(|c| c == b).unwrap();
    matrix.values[i][j]
}

#[test]
fn test_pearson_perfect_positive_and_negative() {
    let df = common::create_correlation_test_dataframe();
    let m = correlation_matrix(&df, CorrelationMethod::Pearson)
        .unwrap()
        .expect("four numeric columns");

    let ab = cell(&m, "a", "b").unwrap();
    assert!((ab - 1.0).abs() < 1e-9, "b = 2*a must give +1, got {}", ab);

    let ac = cell(&m, "a", "c").unwrap();
    assert!((ac + 1.0).abs() < 1e-9, "descending c must give -1, got {}", ac);
}

#[test]
fn test_matrix_is_symmetric_with_unit_diagonal() {
    let df = common::create_correlation_test_dataframe();
    let m = correlation_matrix(&df, CorrelationMethod::Pearson)
        .unwrap()
        .unwrap();

    for i in 0..m.columns.len() {
        let d = m.values[i][i].unwrap();
        assert!((d - 1.0).abs() < 1e-9, "diagonal must be 1, got {}", d);
        for j in 0..m.columns.len() {
            assert_eq!(m.values[i][j], m.values[j][i], "symmetry at ({}, {})", i, j);
        }
    }
}

#[test]
fn test_constant_column_has_no_coefficient() {
    let df = df! {
        "a" => [1.0f64, 2.0, 3.0, 4.0, 5.0],
        "flat" => [7.0f64; 5],
    }
    .unwrap();

    let m = correlation_matrix(&df, CorrelationMethod::Pearson)
        .unwrap()
        .unwrap();

    assert!(
        cell(&m, "a", "flat").is_none(),
        "zero variance leaves the coefficient undefined"
    );
    assert!(cell(&m, "flat", "flat").is_none());
    assert_eq!(cell(&m, "a", "a"), Some(1.0));
}

#[test]
fn test_nulls_skipped_pairwise() {
    let df = df! {
        "a" => [Some(1.0f64), Some(2.0), None, Some(4.0), Some(5.0)],
        "b" => [Some(2.0f64), Some(4.0), Some(6.0), None, Some(10.0)],
    }
    .unwrap();

    let m = correlation_matrix(&df, CorrelationMethod::Pearson)
        .unwrap()
        .unwrap();

    // Complete pairs are (1,2), (2,4), (5,10): still exactly proportional
    let ab = cell(&m, "a", "b").unwrap();
    assert!((ab - 1.0).abs() < 1e-9, "got {}", ab);
}

#[test]
fn test_spearman_monotonic_nonlinear() {
    let df = df! {
        "x" => [1.0f64, 2.0, 3.0, 4.0, 5.0],
        "y" => [1.0f64, 8.0, 27.0, 64.0, 125.0], // x^3: monotonic, not linear
    }
    .unwrap();

    let m = correlation_matrix(&df, CorrelationMethod::Spearman)
        .unwrap()
        .unwrap();
    let xy = cell(&m, "x", "y").unwrap();
    assert!(
        (xy - 1.0).abs() < 1e-9,
        "rank correlation of a monotonic map is 1, got {}",
        xy
    );
    assert_eq!(m.method, "spearman");
}

#[test]
fn test_kendall_known_value() {
    let df = df! {
        "x" => [1.0f64, 2.0, 3.0],
        "y" => [1.0f64, 3.0, 2.0],
    }
    .unwrap();

    let m = correlation_matrix(&df, CorrelationMethod::KendallTau)
        .unwrap()
        .unwrap();
    let xy = cell(&m, "x", "y").unwrap();
    // 2 concordant, 1 discordant, no ties: tau = 1/3
    assert!((xy - 1.0 / 3.0).abs() < 1e-9, "got {}", xy);
}

#[test]
fn test_kendall_perfect_agreement() {
    let df = df! {
        "x" => [3.0f64, 1.0, 4.0, 1.5, 5.0],
        "y" => [3.0f64, 1.0, 4.0, 1.5, 5.0],
    }
    .unwrap();

    let m = correlation_matrix(&df, CorrelationMethod::KendallTau)
        .unwrap()
        .unwrap();
    let xy = cell(&m, "x", "y").unwrap();
    assert!((xy - 1.0).abs() < 1e-9, "got {}", xy);
}

#[test]
fn test_non_numeric_columns_excluded() {
    let df = df! {
        "a" => [1.0f64, 2.0, 3.0],
        "b" => [3.0f64, 2.0, 1.0],
        "label" => ["x", "y", "z"],
        "flag" => [true, false, true],
    }
    .unwrap();

    let m = correlation_matrix(&df, CorrelationMethod::Pearson)
        .unwrap()
        .unwrap();
    assert_eq!(m.columns, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_single_numeric_column_yields_no_matrix() {
    let df = df! {
        "a" => [1.0f64, 2.0, 3.0],
        "label" => ["x", "y", "z"],
    }
    .unwrap();

    assert!(correlation_matrix(&df, CorrelationMethod::Pearson)
        .unwrap()
        .is_none());
}
