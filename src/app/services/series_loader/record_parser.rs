//! Individual record coercion for logger exports
//!
//! Handles timestamp and numeric-cell parsing for one CSV record. Timestamps
//! are day-first; a record whose timestamp does not parse yields `None` and is
//! dropped by the loader. Numeric cells that fail to parse become absent
//! readings, never errors.

use crate::app::models::SampleRow;
use crate::constants::TIMESTAMP_INPUT_FORMATS;
use chrono::NaiveDateTime;
use csv::StringRecord;
use std::collections::BTreeMap;
use tracing::debug;

use super::column_mapping::ColumnIndex;

/// Parse one record into a sample row.
///
/// Returns `None` when the timestamp cell is missing or unparseable.
pub fn parse_sample_row(record: &StringRecord, index: &ColumnIndex) -> Option<SampleRow> {
    let timestamp_str = record.get(index.timestamp_index)?.trim();
    let timestamp = parse_timestamp(timestamp_str)?;

    let mut values = BTreeMap::new();
    for column_name in &index.value_columns {
        let Some(cell_index) = index.get_index(column_name) else {
            continue;
        };
        let Some(cell) = record.get(cell_index) else {
            continue;
        };
        if let Some(value) = parse_value(cell) {
            values.insert(column_name.clone(), value);
        }
    }

    Some(SampleRow::new(timestamp, values))
}

/// Parse a day-first timestamp, trying each accepted format in order.
///
/// Date-only formats resolve to midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in TIMESTAMP_INPUT_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(timestamp);
        }
        if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Parse a numeric cell, tolerating comma decimal separators.
///
/// Empty cells and unparseable values yield `None`; failures are logged at
/// debug level and never interrupt the load.
pub fn parse_value(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = trimmed.parse::<f64>() {
        return finite_or_none(value, trimmed);
    }

    // Comma-decimal exports ("3,14") from Brazilian loggers
    if trimmed.contains(',') && !trimmed.contains('.') {
        if let Ok(value) = trimmed.replace(',', ".").parse::<f64>() {
            return finite_or_none(value, trimmed);
        }
    }

    debug!("Failed to parse cell '{}' as float", trimmed);
    None
}

fn finite_or_none(value: f64, cell: &str) -> Option<f64> {
    if value.is_finite() {
        Some(value)
    } else {
        debug!("Discarding non-finite cell '{}'", cell);
        None
    }
}
