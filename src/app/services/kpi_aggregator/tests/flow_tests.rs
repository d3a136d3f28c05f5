//! Tests for flow-derived KPIs

use super::series_from;
use crate::app::services::kpi_aggregator::{FlowKpiComputer, PumpFlowKpis};
use crate::config::ChannelMap;
use crate::constants::flow_kpis;

#[test]
fn test_empty_contribution_without_flow_column() {
    let channel_map = ChannelMap::default();
    let series = series_from(
        &[(0, &[("AIRMS", 4.0)]), (1, &[("AIRMS", 5.0)])],
        &["AIRMS"],
    );

    let kpis = PumpFlowKpis.compute(&series, &channel_map);
    assert!(kpis.is_empty());
}

#[test]
fn test_empty_contribution_without_flow_readings() {
    let channel_map = ChannelMap::default();
    // Column present in the header, but no row carries a reading
    let series = series_from(&[(0, &[("AIRMS", 4.0)])], &["AIRMS", "Vazao"]);

    let kpis = PumpFlowKpis.compute(&series, &channel_map);
    assert!(kpis.is_empty());
}

#[test]
fn test_mean_and_peak_flow() {
    let channel_map = ChannelMap::default();
    let series = series_from(
        &[
            (0, &[("Vazao", 10.0)]),
            (15, &[("Vazao", 30.0)]),
            (30, &[("Vazao", 20.0)]),
        ],
        &["Vazao"],
    );

    let kpis = PumpFlowKpis.compute(&series, &channel_map);
    assert!((kpis[flow_kpis::MEAN_FLOW] - 20.0).abs() < 1e-9);
    assert!((kpis[flow_kpis::MAX_FLOW] - 30.0).abs() < 1e-9);
}

#[test]
fn test_trapezoidal_volume() {
    let channel_map = ChannelMap::default();
    // Two one-hour gaps: (10+30)/2 * 1h + (30+20)/2 * 1h = 45 m³
    let series = series_from(
        &[
            (0, &[("Vazao", 10.0)]),
            (60, &[("Vazao", 30.0)]),
            (120, &[("Vazao", 20.0)]),
        ],
        &["Vazao"],
    );

    let kpis = PumpFlowKpis.compute(&series, &channel_map);
    assert!((kpis[flow_kpis::TOTAL_VOLUME_M3] - 45.0).abs() < 1e-9);
}

#[test]
fn test_volume_skips_gaps_with_missing_readings() {
    let channel_map = ChannelMap::default();
    let series = series_from(
        &[
            (0, &[("Vazao", 10.0)]),
            (60, &[("AIRMS", 4.0)]), // no flow reading, gap ignored
            (120, &[("Vazao", 10.0)]),
        ],
        &["AIRMS", "Vazao"],
    );

    let kpis = PumpFlowKpis.compute(&series, &channel_map);
    assert!((kpis[flow_kpis::TOTAL_VOLUME_M3] - 0.0).abs() < 1e-9);
}
