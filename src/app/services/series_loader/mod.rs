//! Series loader and normalizer for logger exports
//!
//! Parses semicolon-delimited sensor exports into a normalized, time-indexed
//! [`Series`](crate::Series). Timestamps are coerced day-first; rows whose
//! timestamp fails to parse are dropped (noisy-sensor input is expected) and
//! accounted for in [`LoadStats`].
//!
//! ## Architecture
//!
//! - [`loader`] - Parsing orchestration and file/reader handling
//! - [`column_mapping`] - Header analysis against the channel map
//! - [`record_parser`] - Individual record coercion (timestamps, numerics)
//! - [`stats`] - Load statistics and result structures

pub mod column_mapping;
pub mod loader;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnIndex;
pub use loader::SeriesLoader;
pub use stats::{LoadResult, LoadStats};
