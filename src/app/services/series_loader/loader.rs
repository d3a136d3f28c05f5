//! Core series loading orchestration
//!
//! Reads a semicolon-delimited export, resolves its header against the
//! channel map, coerces each record and produces a normalized time-sorted
//! series together with load statistics.

use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use super::column_mapping::ColumnIndex;
use super::record_parser::parse_sample_row;
use super::stats::{LoadResult, LoadStats};
use crate::config::ChannelMap;
use crate::constants::CSV_DELIMITER;
use crate::{Error, Result, Series};

/// Loader for semicolon-delimited logger exports
///
/// The loader borrows an immutable channel map; it holds no other state, so
/// one instance can serve any number of sequential loads.
#[derive(Debug)]
pub struct SeriesLoader<'a> {
    channel_map: &'a ChannelMap,
}

impl<'a> SeriesLoader<'a> {
    /// Create a loader over a channel map
    pub fn new(channel_map: &'a ChannelMap) -> Self {
        Self { channel_map }
    }

    /// Load and normalize an export file
    pub fn load_path(&self, path: &Path) -> Result<LoadResult> {
        info!("Loading export file: {}", path.display());
        let file = std::fs::File::open(path)
            .map_err(|e| Error::io(format!("failed to open {}", path.display()), e))?;
        self.load_reader(file)
    }

    /// Load and normalize an export from any byte reader
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<LoadResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(CSV_DELIMITER)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::csv_parsing("failed to read export header row", Some(e)))?;

        let column_index = ColumnIndex::analyze(headers, self.channel_map)?;
        debug!(
            "Header resolved: timestamp at index {}, {} data columns",
            column_index.timestamp_index,
            column_index.value_columns.len()
        );

        let mut stats = LoadStats::new();
        let mut rows = Vec::new();

        for result in csv_reader.records() {
            stats.total_records += 1;

            match result {
                Ok(record) => match parse_sample_row(&record, &column_index) {
                    Some(row) => {
                        rows.push(row);
                        stats.rows_loaded += 1;
                    }
                    None => {
                        stats.add_dropped(format!(
                            "record {}: unparseable timestamp",
                            stats.total_records
                        ));
                    }
                },
                Err(e) => {
                    stats.add_dropped(format!(
                        "record {}: CSV parse error: {}",
                        stats.total_records, e
                    ));
                }
            }
        }

        let series = Series::new(rows, column_index.column_set());
        info!("{}", stats.summary());

        Ok(LoadResult { series, stats })
    }
}
