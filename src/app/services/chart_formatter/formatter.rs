//! Channel-group resolution and point formatting

use crate::app::models::{ChartPoint, ChartSeries, Series};
use crate::config::ChannelMap;

/// Format one channel group as a chart series.
///
/// Each canonical channel in the group is resolved through the channel map
/// and kept only when the source header actually carries its column. A group
/// with no resolvable columns yields `None`, which serializes as `null` so
/// the client can tell "channel group not instrumented" apart from "no
/// readings". Points carry the literal column names as field keys.
pub fn format_chart_group(
    series: &Series,
    channel_map: &ChannelMap,
    group: &[&str],
) -> Option<ChartSeries> {
    let columns: Vec<&str> = group
        .iter()
        .filter_map(|channel| channel_map.column(channel))
        .filter(|column| series.has_column(column))
        .collect();

    if columns.is_empty() {
        return None;
    }

    Some(
        series
            .rows()
            .iter()
            .map(|row| ChartPoint::from_row(row, &columns))
            .collect(),
    )
}
