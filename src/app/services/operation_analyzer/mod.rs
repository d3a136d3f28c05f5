//! Operating-state analysis for motor series
//!
//! Classifies a normalized series into operating vs. idle samples based on
//! the reference current channel, sub-classifies operating samples by voltage
//! stability against a nominal reference, and produces a qualitative summary
//! with a categorical verdict.
//!
//! ## Architecture
//!
//! - [`analyzer`] - Partitioning and classification logic
//! - [`summary`] - Summary structure, verdict and human description

pub mod analyzer;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use analyzer::{analyze_operation, operating_rows};
pub use summary::{OperationSummary, Verdict};
