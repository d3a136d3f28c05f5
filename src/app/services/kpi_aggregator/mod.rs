//! KPI aggregation over operating intervals
//!
//! Computes the scalar summary statistics of one analysis: mean voltage,
//! current and power factor over operating rows only, the analyzed-period
//! string over the full series, and flow-derived KPIs through a pluggable
//! computer.
//!
//! ## Architecture
//!
//! - [`aggregator`] - Scalar KPI computation and assembly
//! - [`flow`] - Flow-derived KPI seam and default implementation

pub mod aggregator;
pub mod flow;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use aggregator::{aggregate_kpis, period_analyzed};
pub use flow::{FlowKpiComputer, PumpFlowKpis};
