//! Scalar KPI computation and assembly

use tracing::debug;

use super::flow::FlowKpiComputer;
use crate::app::models::{KpiSet, SampleRow, Series};
use crate::app::services::operation_analyzer::OperationSummary;
use crate::config::ChannelMap;
use crate::constants::{PERIOD_DATE_FORMAT, channels};
use crate::{Error, Result};

/// Assemble the KPI set for one analysis.
///
/// The three reference means cover operating rows only; idle readings are not
/// representative of equipment health. With no operating rows (or no
/// contributing readings for a channel) a mean is exactly 0.0 so downstream
/// consumers never see missing-value sentinels. The analyzed period spans the
/// full series and fails with [`Error::EmptySeries`] when no rows exist.
pub fn aggregate_kpis(
    series: &Series,
    operating: &[&SampleRow],
    channel_map: &ChannelMap,
    summary: &OperationSummary,
    flow: &dyn FlowKpiComputer,
) -> Result<KpiSet> {
    let periodo_analisado = period_analyzed(series)?;

    let kpis = KpiSet {
        tensao_media: channel_mean(operating, channel_map, channels::VOLTAGE_A),
        corrente_media: channel_mean(operating, channel_map, channels::CURRENT_A),
        fp_medio: channel_mean(operating, channel_map, channels::POWER_FACTOR_A),
        periodo_analisado,
        analise_operacao: summary.describe(),
        extras: flow.compute(series, channel_map),
    };

    debug!(
        "KPIs: tensao_media={:.1} corrente_media={:.2} fp_medio={:.3} ({} flow keys)",
        kpis.tensao_media,
        kpis.corrente_media,
        kpis.fp_medio,
        kpis.extras.len()
    );

    Ok(kpis)
}

/// Analyzed-period string: `DD/MM/YYYY a DD/MM/YYYY` over the full series
pub fn period_analyzed(series: &Series) -> Result<String> {
    let (Some(first), Some(last)) = (series.first_timestamp(), series.last_timestamp()) else {
        return Err(Error::empty_series(
            "no valid rows remain after timestamp normalization",
        ));
    };

    Ok(format!(
        "{} a {}",
        first.format(PERIOD_DATE_FORMAT),
        last.format(PERIOD_DATE_FORMAT)
    ))
}

/// Mean of a canonical channel over the given rows, skipping absent readings.
/// Unmapped channels and empty contributions yield 0.0.
fn channel_mean(rows: &[&SampleRow], channel_map: &ChannelMap, channel: &str) -> f64 {
    let Some(column) = channel_map.column(channel) else {
        return 0.0;
    };

    let mut sum = 0.0;
    let mut count = 0usize;
    for row in rows {
        if let Some(value) = row.value(column) {
            sum += value;
            count += 1;
        }
    }

    if count == 0 { 0.0 } else { sum / count as f64 }
}
