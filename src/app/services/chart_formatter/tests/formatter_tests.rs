//! Tests for channel-group chart formatting

use super::series_from;
use crate::app::services::chart_formatter::format_chart_group;
use crate::config::ChannelMap;
use crate::constants::chart_groups;

#[test]
fn test_group_resolves_only_present_columns() {
    let channel_map = ChannelMap::default();
    // Single-phase export: only phase A voltage present
    let series = series_from(
        &[(0, &[("AVRMS", 380.0)]), (60, &[("AVRMS", 381.0)])],
        &["AVRMS"],
    );

    let chart = format_chart_group(&series, &channel_map, chart_groups::VOLTAGE).unwrap();

    assert_eq!(chart.len(), 2);
    assert!(chart[0].values.contains_key("AVRMS"));
    assert!(!chart[0].values.contains_key("BVRMS"));
}

#[test]
fn test_absent_group_yields_none() {
    let channel_map = ChannelMap::default();
    let series = series_from(&[(0, &[("AVRMS", 380.0)])], &["AVRMS"]);

    assert!(format_chart_group(&series, &channel_map, chart_groups::CURRENT).is_none());
    assert!(format_chart_group(&series, &channel_map, chart_groups::LEVEL).is_none());
}

#[test]
fn test_points_carry_literal_column_keys_and_nulls() {
    let channel_map = ChannelMap::default();
    let series = series_from(
        &[
            (0, &[("AIRMS", 4.0), ("BIRMS", 4.1)]),
            (60, &[("AIRMS", 4.2)]),
        ],
        &["AIRMS", "BIRMS"],
    );

    let chart = format_chart_group(&series, &channel_map, chart_groups::CURRENT).unwrap();

    assert_eq!(chart[0].values["AIRMS"], Some(4.0));
    assert_eq!(chart[1].values["AIRMS"], Some(4.2));
    // Present column, missing reading: explicit null
    assert_eq!(chart[1].values["BIRMS"], None);
}

#[test]
fn test_timestamps_are_iso_local() {
    let channel_map = ChannelMap::default();
    let series = series_from(&[(8 * 3600 + 90, &[("AIRMS", 4.0)])], &["AIRMS"]);

    let chart = format_chart_group(&series, &channel_map, chart_groups::CURRENT).unwrap();
    assert_eq!(chart[0].timestamp, "2024-01-01T08:01:30");
}

#[test]
fn test_unmapped_channel_is_skipped() {
    let channel_map =
        ChannelMap::from_json_str(r#"{"timestamp": "Data/Hora", "corrente_a": "AIRMS"}"#).unwrap();
    let series = series_from(&[(0, &[("AIRMS", 4.0), ("Nivel", 2.5)])], &["AIRMS", "Nivel"]);

    // Column exists in the export but the mapping does not claim it
    assert!(format_chart_group(&series, &channel_map, chart_groups::LEVEL).is_none());
}
