//! Motorlog Analyzer Library
//!
//! A Rust library for analyzing electrical time-series exports from
//! field-installed motor monitoring loggers.
//!
//! This library provides tools for:
//! - Parsing semicolon-delimited sensor exports with day-first timestamps
//! - Normalizing irregularly-sampled series (drop bad rows, sort by time)
//! - Classifying operating vs. idle intervals and voltage stability
//! - Computing operational KPIs over operating intervals only
//! - Downsampling large series into fixed 15-minute buckets
//! - Emitting chart-ready series grouped per channel family

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod chart_formatter;
        pub mod instant_analysis;
        pub mod kpi_aggregator;
        pub mod operation_analyzer;
        pub mod series_loader;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AnalysisResponse, ChartPoint, KpiSet, SampleRow, Series};
pub use app::services::instant_analysis::{AnalysisOutcome, InstantAnalyzer};
pub use config::ChannelMap;

/// Result type alias for the analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for instantaneous analysis operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required canonical channel is absent from the uploaded file after mapping
    #[error("required column '{column}' (channel '{channel}') not found in upload")]
    MissingColumn { channel: String, column: String },

    /// No valid rows remain after timestamp normalization
    #[error("empty series: {message}")]
    EmptySeries { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error: {message}")]
    CsvParsing {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error (channel map, CLI arguments)
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Any other processing failure
    #[error("unexpected processing error: {message}")]
    Unexpected { message: String },
}

impl Error {
    /// Create a missing-column error naming the canonical channel and the
    /// literal column it mapped to
    pub fn missing_column(channel: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            channel: channel.into(),
            column: column.into(),
        }
    }

    /// Create an empty-series error
    pub fn empty_series(message: impl Into<String>) -> Self {
        Self::EmptySeries {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unexpected processing error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Whether this failure is correctable by the caller fixing their input.
    ///
    /// The API layer maps user-correctable errors to HTTP 400 and everything
    /// else to 500; the CLI exits 2 vs 1 on the same split.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn { .. } | Self::EmptySeries { .. } | Self::Configuration { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Unexpected {
            message: format!("JSON serialization failed: {}", error),
        }
    }
}
