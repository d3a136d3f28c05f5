//! Header analysis for logger exports
//!
//! Resolves the export's header row against the channel map: locates the
//! timestamp column (required) and catalogs every other column as a numeric
//! data channel.

use crate::config::ChannelMap;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::{BTreeSet, HashMap};

/// Column layout of one export, resolved from its header row
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Index of the timestamp column
    pub timestamp_index: usize,

    /// All data columns (everything except the timestamp), in header order
    pub value_columns: Vec<String>,
}

impl ColumnIndex {
    /// Analyze a header row against the channel map.
    ///
    /// Fails with [`Error::MissingColumn`] when the mapped timestamp column is
    /// absent; every remaining column becomes a candidate data channel.
    pub fn analyze(headers: &StringRecord, channel_map: &ChannelMap) -> Result<Self> {
        let timestamp_column = channel_map.timestamp_column()?;

        let mut name_to_index = HashMap::new();
        let mut value_columns = Vec::new();
        let mut timestamp_index = None;

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim().to_string();
            if column_name.is_empty() {
                continue;
            }

            if column_name == timestamp_column {
                timestamp_index = Some(index);
            } else {
                value_columns.push(column_name.clone());
            }
            name_to_index.insert(column_name, index);
        }

        let timestamp_index = timestamp_index.ok_or_else(|| {
            Error::missing_column(crate::constants::channels::TIMESTAMP, timestamp_column)
        })?;

        Ok(ColumnIndex {
            name_to_index,
            timestamp_index,
            value_columns,
        })
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the header
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Data column names as a set, for series construction
    pub fn column_set(&self) -> BTreeSet<String> {
        self.value_columns.iter().cloned().collect()
    }
}
