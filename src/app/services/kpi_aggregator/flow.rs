//! Flow-derived KPIs
//!
//! Contributions are keyed by the presence of the mapped flow channel: an
//! export without flow data yields an empty contribution, never an error.
//! The computer is a trait seam so deployments with different pump
//! instrumentation can substitute their own routine.

use crate::app::models::Series;
use crate::config::ChannelMap;
use crate::constants::{channels, flow_kpis};
use std::collections::BTreeMap;

/// Pluggable flow-KPI routine
pub trait FlowKpiComputer: Send + Sync {
    /// KPI contributions for this series; empty when no flow data exists
    fn compute(&self, series: &Series, channel_map: &ChannelMap) -> BTreeMap<String, f64>;
}

/// Default flow computer for pump installations.
///
/// Expects the flow channel in m³/h and contributes mean flow, peak flow and
/// total pumped volume (trapezoidal integration over inter-sample gaps).
#[derive(Debug, Clone, Copy, Default)]
pub struct PumpFlowKpis;

impl FlowKpiComputer for PumpFlowKpis {
    fn compute(&self, series: &Series, channel_map: &ChannelMap) -> BTreeMap<String, f64> {
        let mut kpis = BTreeMap::new();

        let Some(flow_column) = channel_map.column(channels::FLOW) else {
            return kpis;
        };
        if !series.has_column(flow_column) {
            return kpis;
        }

        let mut sum = 0.0;
        let mut count = 0usize;
        let mut max = f64::NEG_INFINITY;
        for value in series.channel_values(flow_column) {
            sum += value;
            count += 1;
            if value > max {
                max = value;
            }
        }
        if count == 0 {
            return kpis;
        }

        kpis.insert(flow_kpis::MEAN_FLOW.to_string(), sum / count as f64);
        kpis.insert(flow_kpis::MAX_FLOW.to_string(), max);
        kpis.insert(
            flow_kpis::TOTAL_VOLUME_M3.to_string(),
            integrate_volume(series, flow_column),
        );

        kpis
    }
}

/// Total volume in m³: trapezoidal integration of flow (m³/h) over the gaps
/// between consecutive rows that both carry a reading
fn integrate_volume(series: &Series, flow_column: &str) -> f64 {
    let mut volume = 0.0;

    for window in series.rows().windows(2) {
        let (previous, current) = (&window[0], &window[1]);
        let (Some(flow_a), Some(flow_b)) =
            (previous.value(flow_column), current.value(flow_column))
        else {
            continue;
        };

        let gap_seconds = (current.timestamp - previous.timestamp).num_seconds();
        if gap_seconds <= 0 {
            continue;
        }
        let gap_hours = gap_seconds as f64 / 3600.0;
        volume += (flow_a + flow_b) / 2.0 * gap_hours;
    }

    volume
}
