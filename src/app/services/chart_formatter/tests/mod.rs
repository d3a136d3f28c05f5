//! Test utilities for chart formatting testing

use crate::app::models::{SampleRow, Series};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, BTreeSet};

// Test modules
mod formatter_tests;

pub fn base_ts() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Build a series from (second offset, [(column, value)]) tuples
pub fn series_from(points: &[(i64, &[(&str, f64)])], columns: &[&str]) -> Series {
    let rows = points
        .iter()
        .map(|(offset, pairs)| {
            let values: BTreeMap<String, f64> = pairs
                .iter()
                .map(|(column, value)| (column.to_string(), *value))
                .collect();
            SampleRow::new(base_ts() + Duration::seconds(*offset), values)
        })
        .collect();

    Series::new(rows, columns.iter().map(|c| c.to_string()).collect())
}

/// Build a dense series with one AIRMS reading every ten seconds
pub fn dense_series(n_rows: usize) -> Series {
    let rows = (0..n_rows)
        .map(|i| {
            SampleRow::new(
                base_ts() + Duration::seconds(10 * i as i64),
                BTreeMap::from([("AIRMS".to_string(), i as f64)]),
            )
        })
        .collect();

    Series::new(rows, BTreeSet::from(["AIRMS".to_string()]))
}
