//! Tests for header analysis against the channel map

use crate::Error;
use crate::app::services::series_loader::column_mapping::ColumnIndex;
use crate::config::ChannelMap;
use csv::StringRecord;

fn headers(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

#[test]
fn test_analyze_resolves_timestamp_and_value_columns() {
    let channel_map = ChannelMap::default();
    let index =
        ColumnIndex::analyze(&headers(&["Data/Hora", "AVRMS", "AIRMS"]), &channel_map).unwrap();

    assert_eq!(index.timestamp_index, 0);
    assert_eq!(index.value_columns, vec!["AVRMS", "AIRMS"]);
    assert_eq!(index.get_index("AIRMS"), Some(2));
    assert!(index.has_column("AVRMS"));
    assert!(!index.has_column("BVRMS"));
}

#[test]
fn test_analyze_timestamp_not_first_column() {
    let channel_map = ChannelMap::default();
    let index =
        ColumnIndex::analyze(&headers(&["AVRMS", "Data/Hora", "AIRMS"]), &channel_map).unwrap();

    assert_eq!(index.timestamp_index, 1);
    assert_eq!(index.value_columns, vec!["AVRMS", "AIRMS"]);
}

#[test]
fn test_analyze_trims_header_whitespace() {
    let channel_map = ChannelMap::default();
    let index =
        ColumnIndex::analyze(&headers(&[" Data/Hora ", " AIRMS "]), &channel_map).unwrap();

    assert_eq!(index.timestamp_index, 0);
    assert!(index.has_column("AIRMS"));
}

#[test]
fn test_analyze_missing_timestamp_column_errors() {
    let channel_map = ChannelMap::default();
    let result = ColumnIndex::analyze(&headers(&["AVRMS", "AIRMS"]), &channel_map);

    match result {
        Err(Error::MissingColumn { channel, column }) => {
            assert_eq!(channel, "timestamp");
            assert_eq!(column, "Data/Hora");
        }
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_analyze_with_custom_mapping() {
    let channel_map =
        ChannelMap::from_json_str(r#"{"timestamp": "Time", "corrente_a": "IA"}"#).unwrap();
    let index = ColumnIndex::analyze(&headers(&["Time", "IA", "VA"]), &channel_map).unwrap();

    assert_eq!(index.timestamp_index, 0);
    assert_eq!(index.value_columns, vec!["IA", "VA"]);
}

#[test]
fn test_column_set_excludes_timestamp() {
    let channel_map = ChannelMap::default();
    let index =
        ColumnIndex::analyze(&headers(&["Data/Hora", "AVRMS", "AIRMS"]), &channel_map).unwrap();

    let set = index.column_set();
    assert!(set.contains("AVRMS"));
    assert!(set.contains("AIRMS"));
    assert!(!set.contains("Data/Hora"));
}
