//! Load statistics and result structures for series loading

use crate::Series;
use crate::constants::MAX_RETAINED_PARSE_ERRORS;

/// Statistics for one load operation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadStats {
    /// Total data records read from the file
    pub total_records: usize,
    /// Rows that parsed into the series
    pub rows_loaded: usize,
    /// Rows dropped for an unparseable timestamp or a record-level CSV error
    pub rows_dropped: usize,
    /// Retained per-record error messages, bounded for large noisy files
    pub parse_errors: Vec<String>,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dropped row with its reason
    pub fn add_dropped(&mut self, message: String) {
        self.rows_dropped += 1;
        if self.parse_errors.len() < MAX_RETAINED_PARSE_ERRORS {
            self.parse_errors.push(message);
        }
    }

    /// Fraction of records that were dropped
    pub fn drop_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            self.rows_dropped as f64 / self.total_records as f64
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Load summary: {} records -> {} rows ({} dropped, {:.1}% drop rate)",
            self.total_records,
            self.rows_loaded,
            self.rows_dropped,
            self.drop_rate() * 100.0
        )
    }
}

/// Result of one load operation
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Normalized, time-sorted series
    pub series: Series,
    /// Load statistics and dropped-row information
    pub stats: LoadStats,
}
