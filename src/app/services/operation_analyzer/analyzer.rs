//! Operating-state partitioning and voltage-stability classification

use tracing::debug;

use super::summary::OperationSummary;
use crate::app::models::{SampleRow, Series};
use crate::config::ChannelMap;
use crate::constants::{OPERATING_CURRENT_THRESHOLD_AMPS, channels, voltage_stability_band};
use crate::{Error, Result};

/// Operating rows of a series: reference current present and above threshold.
///
/// A missing current reading counts as idle. Fails with
/// [`Error::MissingColumn`] when the mapped reference current column is not in
/// the series header.
pub fn operating_rows<'a>(series: &'a Series, channel_map: &ChannelMap) -> Result<Vec<&'a SampleRow>> {
    let current_column = reference_current_column(series, channel_map)?;

    Ok(series
        .rows()
        .iter()
        .filter(|row| is_operating(row, current_column))
        .collect())
}

/// Analyze operating state against a nominal voltage reference.
///
/// Partitions the series into operating and idle samples, then classifies
/// each operating sample against the ±10% stability band around the nominal
/// voltage. Series with no mapped voltage column produce a summary with all
/// operating samples unclassified. Empty series produce an all-zero summary
/// (verdict "no operation detected") and never error beyond the required
/// current column check.
pub fn analyze_operation(
    series: &Series,
    channel_map: &ChannelMap,
    nominal_voltage: f64,
) -> Result<OperationSummary> {
    let current_column = reference_current_column(series, channel_map)?;
    let voltage_column = channel_map
        .column(channels::VOLTAGE_A)
        .filter(|column| series.has_column(column));
    let (band_low, band_high) = voltage_stability_band(nominal_voltage);

    let mut summary = OperationSummary::default();

    for row in series.rows() {
        if !is_operating(row, current_column) {
            summary.idle_samples += 1;
            continue;
        }
        summary.operating_samples += 1;

        match voltage_column.and_then(|column| row.value(column)) {
            Some(voltage) if voltage < band_low => summary.undervoltage_samples += 1,
            Some(voltage) if voltage > band_high => summary.overvoltage_samples += 1,
            Some(_) => summary.stable_samples += 1,
            None => summary.unclassified_samples += 1,
        }
    }

    debug!(
        "Operating-state analysis: {} operating / {} idle, verdict '{}'",
        summary.operating_samples,
        summary.idle_samples,
        summary.verdict()
    );

    Ok(summary)
}

fn is_operating(row: &SampleRow, current_column: &str) -> bool {
    row.value(current_column)
        .is_some_and(|current| current > OPERATING_CURRENT_THRESHOLD_AMPS)
}

fn reference_current_column<'a>(
    series: &Series,
    channel_map: &'a ChannelMap,
) -> Result<&'a str> {
    let column = channel_map.required_column(channels::CURRENT_A)?;
    if !series.has_column(column) {
        return Err(Error::missing_column(channels::CURRENT_A, column));
    }
    Ok(column)
}
