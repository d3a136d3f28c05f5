//! Tests for individual record coercion

use super::ts;
use crate::app::services::series_loader::column_mapping::ColumnIndex;
use crate::app::services::series_loader::record_parser::{
    parse_sample_row, parse_timestamp, parse_value,
};
use crate::config::ChannelMap;
use csv::StringRecord;

#[test]
fn test_parse_timestamp_dayfirst_formats() {
    assert_eq!(
        parse_timestamp("15/03/2024 10:30:45"),
        Some(ts(2024, 3, 15, 10, 30, 45))
    );
    assert_eq!(
        parse_timestamp("15/03/2024 10:30"),
        Some(ts(2024, 3, 15, 10, 30, 0))
    );
    assert_eq!(
        parse_timestamp("15/03/24 10:30:45"),
        Some(ts(2024, 3, 15, 10, 30, 45))
    );
    assert_eq!(
        parse_timestamp("15-03-2024 10:30:45"),
        Some(ts(2024, 3, 15, 10, 30, 45))
    );
}

#[test]
fn test_parse_timestamp_date_only_resolves_to_midnight() {
    assert_eq!(parse_timestamp("15/03/2024"), Some(ts(2024, 3, 15, 0, 0, 0)));
}

#[test]
fn test_parse_timestamp_is_dayfirst_not_monthfirst() {
    // 02/03 is March 2nd, not February 3rd
    assert_eq!(
        parse_timestamp("02/03/2024 00:00:00"),
        Some(ts(2024, 3, 2, 0, 0, 0))
    );
}

#[test]
fn test_parse_timestamp_rejects_garbage() {
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("not a date"), None);
    assert_eq!(parse_timestamp("2024-03-15T10:30:45"), None);
    assert_eq!(parse_timestamp("32/01/2024 00:00:00"), None);
}

#[test]
fn test_parse_value_plain_and_comma_decimal() {
    assert_eq!(parse_value("3.14"), Some(3.14));
    assert_eq!(parse_value(" 42 "), Some(42.0));
    assert_eq!(parse_value("3,14"), Some(3.14));
    assert_eq!(parse_value("-0,5"), Some(-0.5));
}

#[test]
fn test_parse_value_missing_and_garbage() {
    assert_eq!(parse_value(""), None);
    assert_eq!(parse_value("   "), None);
    assert_eq!(parse_value("n/a"), None);
    assert_eq!(parse_value("1.2.3"), None);
    assert_eq!(parse_value("inf"), None);
    assert_eq!(parse_value("NaN"), None);
}

#[test]
fn test_parse_sample_row_collects_present_values() {
    let channel_map = ChannelMap::default();
    let headers = StringRecord::from(vec!["Data/Hora", "AVRMS", "AIRMS"]);
    let index = ColumnIndex::analyze(&headers, &channel_map).unwrap();

    let record = StringRecord::from(vec!["01/01/2024 08:00:00", "380.5", ""]);
    let row = parse_sample_row(&record, &index).unwrap();

    assert_eq!(row.timestamp, ts(2024, 1, 1, 8, 0, 0));
    assert_eq!(row.value("AVRMS"), Some(380.5));
    assert_eq!(row.value("AIRMS"), None);
}

#[test]
fn test_parse_sample_row_bad_timestamp_is_none() {
    let channel_map = ChannelMap::default();
    let headers = StringRecord::from(vec!["Data/Hora", "AIRMS"]);
    let index = ColumnIndex::analyze(&headers, &channel_map).unwrap();

    let record = StringRecord::from(vec!["garbage", "5.0"]);
    assert!(parse_sample_row(&record, &index).is_none());
}

#[test]
fn test_parse_sample_row_short_record_is_tolerated() {
    let channel_map = ChannelMap::default();
    let headers = StringRecord::from(vec!["Data/Hora", "AVRMS", "AIRMS"]);
    let index = ColumnIndex::analyze(&headers, &channel_map).unwrap();

    // Ragged record missing the trailing cells
    let record = StringRecord::from(vec!["01/01/2024 08:00:00", "380.5"]);
    let row = parse_sample_row(&record, &index).unwrap();

    assert_eq!(row.value("AVRMS"), Some(380.5));
    assert_eq!(row.value("AIRMS"), None);
}
