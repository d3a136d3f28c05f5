//! Chart output preparation
//!
//! Turns the normalized series into chart-ready point lists: one optional
//! series per channel group, downsampled to fixed wall-clock buckets when the
//! source is too dense to plot directly.
//!
//! ## Architecture
//!
//! - [`resampler`] - Fixed-interval mean downsampling
//! - [`formatter`] - Channel-group resolution and point formatting

pub mod formatter;
pub mod resampler;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use formatter::format_chart_group;
pub use resampler::{needs_resampling, resample_to_buckets};
