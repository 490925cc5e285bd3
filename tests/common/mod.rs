//! Shared test utilities and fixture generators
#![allow(dead_code)]

use polars::prelude::*;

/// Create a mixed-kind DataFrame with known characteristics:
/// - `survived`: numeric binary column
/// - `fare`: clean continuous numeric feature
/// - `age`: numeric with 40% missing
/// - `sex`: categorical strings
/// - `alone`: boolean
/// The last row duplicates the first one exactly.
pub fn create_profile_test_dataframe() -> DataFrame {
    df! {
        "survived" => [0i32, 1, 0, 1, 0, 0],
        "fare" => [7.25f64, 71.28, 8.05, 53.1, 8.46, 7.25],
        "age" => [Some(22.0f64), Some(38.0), None, Some(35.0), None, Some(22.0)],
        "sex" => ["male", "female", "male", "female", "male", "male"],
        "alone" => [true, false, true, false, true, true],
    }
    .unwrap()
}

/// DataFrame with specific missing value patterns
pub fn create_missing_test_dataframe() -> DataFrame {
    df! {
        "col_complete" => [1.0f64, 2.0, 3.0, 4.0, 5.0],
        "col_20pct_missing" => [Some(1.0f64), None, Some(3.0), Some(4.0), Some(5.0)],
        "col_40pct_missing" => [Some(1.0f64), Some(2.0), None, None, Some(5.0)],
        "col_all_missing" => [None::<f64>, None, None, None, None],
    }
    .unwrap()
}

/// DataFrame with known correlation patterns
pub fn create_correlation_test_dataframe() -> DataFrame {
    df! {
        "a" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        "b" => [2.0f64, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0], // b = 2*a
        "c" => [10.0f64, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0],      // descending
        "d" => [5.0f64, 1.0, 8.0, 2.0, 9.0, 3.0, 7.0, 4.0, 6.0, 0.0],       // scrambled
    }
    .unwrap()
}

/// Tall DataFrame (200 rows) with a deterministic missing pattern, for
/// downsampling tests
pub fn create_tall_missing_dataframe() -> DataFrame {
    let x: Vec<Option<f64>> = (0..200)
        .map(|i| if i % 3 == 0 { None } else { Some(i as f64) })
        .collect();
    let y: Vec<Option<f64>> = (0..200)
        .map(|i| if i % 3 == 0 { None } else { Some((i * 2) as f64) })
        .collect();
    let z: Vec<f64> = (0..200).map(|i| (i % 7) as f64).collect();

    DataFrame::new(vec![
        Column::new("x".into(), x),
        Column::new("y".into(), y),
        Column::new("z".into(), z),
    ])
    .unwrap()
}
