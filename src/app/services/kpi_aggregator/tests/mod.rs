//! Test utilities for KPI aggregation testing

use crate::app::models::{SampleRow, Series};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, BTreeSet};

mod flow_tests;

pub fn base_ts() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Build a series from (minute offset, [(column, value)]) tuples
pub fn series_from(points: &[(i64, &[(&str, f64)])], columns: &[&str]) -> Series {
    let rows = points
        .iter()
        .map(|(offset, pairs)| {
            let values: BTreeMap<String, f64> = pairs
                .iter()
                .map(|(column, value)| (column.to_string(), *value))
                .collect();
            SampleRow::new(base_ts() + Duration::minutes(*offset), values)
        })
        .collect();

    Series::new(rows, columns.iter().map(|c| c.to_string()).collect())
}
