//! Test utilities for operating-state analysis testing

use crate::app::models::{SampleRow, Series};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, BTreeSet};


pub fn base_ts() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

/// Build a series of (current, voltage) pairs at one-minute spacing in the
/// default column layout
pub fn series_of(pairs: &[(Option<f64>, Option<f64>)]) -> Series {
    let rows = pairs
        .iter()
        .enumerate()
        .map(|(i, (current, voltage))| {
            let mut values = BTreeMap::new();
            if let Some(current) = current {
                values.insert("AIRMS".to_string(), *current);
            }
            if let Some(voltage) = voltage {
                values.insert("AVRMS".to_string(), *voltage);
            }
            SampleRow::new(base_ts() + Duration::minutes(i as i64), values)
        })
        .collect();

    Series::new(
        rows,
        BTreeSet::from(["AIRMS".to_string(), "AVRMS".to_string()]),
    )
}
