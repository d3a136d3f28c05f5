//! Fixed-interval mean downsampling
//!
//! Dense exports are reduced to one mean row per wall-clock bucket before
//! charting. Buckets are anchored at the clock marks (:00, :15, :30, :45),
//! not at the first sample, so two exports covering the same wall time land
//! in the same buckets.

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, Timelike};
use tracing::debug;

use crate::app::models::{SampleRow, Series};
use crate::constants::{RESAMPLE_BUCKET_MINUTES, RESAMPLE_MAX_POINTS};

/// Whether a series is dense enough to require downsampling before charting
pub fn needs_resampling(series: &Series) -> bool {
    series.len() > RESAMPLE_MAX_POINTS
}

/// Downsample to one row per wall-clock bucket, averaging each channel over
/// the readings that fall inside it.
///
/// A channel with no readings in a bucket is absent from the bucket row, and
/// buckets where no channel has a reading are dropped entirely. Rows keep
/// the source column set, so chart-group resolution is unaffected.
pub fn resample_to_buckets(series: &Series) -> Series {
    let mut buckets: BTreeMap<NaiveDateTime, BTreeMap<String, (f64, usize)>> = BTreeMap::new();

    for row in series.rows() {
        let bucket = buckets.entry(bucket_start(row.timestamp)).or_default();
        for (column, value) in &row.values {
            let (sum, count) = bucket.entry(column.clone()).or_insert((0.0, 0));
            *sum += value;
            *count += 1;
        }
    }

    let rows: Vec<SampleRow> = buckets
        .into_iter()
        .filter(|(_, channels)| !channels.is_empty())
        .map(|(timestamp, channels)| {
            let means = channels
                .into_iter()
                .map(|(column, (sum, count))| (column, sum / count as f64))
                .collect();
            SampleRow::new(timestamp, means)
        })
        .collect();

    debug!(
        "resampled {} rows into {} buckets of {} min",
        series.len(),
        rows.len(),
        RESAMPLE_BUCKET_MINUTES
    );

    Series::new(rows, series.columns().clone())
}

/// Wall-clock start of the bucket containing a timestamp
fn bucket_start(timestamp: NaiveDateTime) -> NaiveDateTime {
    let minute = timestamp.minute() - timestamp.minute() % RESAMPLE_BUCKET_MINUTES;
    timestamp
        .with_minute(minute)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(timestamp)
}
