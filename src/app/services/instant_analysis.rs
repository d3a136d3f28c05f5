//! Instantaneous analysis engine
//!
//! Orchestrates one analysis request end to end: load and normalize the
//! export, partition operating intervals, compute KPIs, downsample when the
//! series is too dense to plot, and assemble the chart-ready response.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::app::adapters::filesystem::TempUpload;
use crate::app::models::AnalysisResponse;
use crate::app::services::chart_formatter::{format_chart_group, needs_resampling, resample_to_buckets};
use crate::app::services::kpi_aggregator::{FlowKpiComputer, PumpFlowKpis, aggregate_kpis};
use crate::app::services::operation_analyzer::{analyze_operation, operating_rows};
use crate::app::services::series_loader::{LoadStats, SeriesLoader};
use crate::config::ChannelMap;
use crate::constants::{DEFAULT_NOMINAL_VOLTAGE, chart_groups};
use crate::{Error, Result, Series};

/// Outcome of one analysis: the chart-ready response plus load statistics
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub response: AnalysisResponse,
    pub stats: LoadStats,
}

/// The instantaneous analysis engine.
///
/// Holds the channel map, the nominal voltage reference and the flow-KPI
/// computer for a deployment; each `analyze_*` call is an independent request
/// over that configuration.
pub struct InstantAnalyzer {
    channel_map: ChannelMap,
    nominal_voltage: f64,
    flow: Box<dyn FlowKpiComputer>,
}

impl Default for InstantAnalyzer {
    fn default() -> Self {
        Self::new(ChannelMap::default())
    }
}

impl InstantAnalyzer {
    /// Create an analyzer with the default nominal voltage and flow computer
    pub fn new(channel_map: ChannelMap) -> Self {
        Self {
            channel_map,
            nominal_voltage: DEFAULT_NOMINAL_VOLTAGE,
            flow: Box::new(PumpFlowKpis),
        }
    }

    /// Override the nominal line voltage used for stability classification
    pub fn with_nominal_voltage(mut self, nominal_voltage: f64) -> Self {
        self.nominal_voltage = nominal_voltage;
        self
    }

    /// Substitute the flow-KPI computer
    pub fn with_flow_computer(mut self, flow: Box<dyn FlowKpiComputer>) -> Self {
        self.flow = flow;
        self
    }

    pub fn channel_map(&self) -> &ChannelMap {
        &self.channel_map
    }

    /// Analyze an export file on disk
    pub fn analyze_path(&self, path: &Path) -> Result<AnalysisOutcome> {
        let loaded = SeriesLoader::new(&self.channel_map).load_path(path)?;
        self.analyze_loaded(loaded.series, loaded.stats)
    }

    /// Analyze an export from any byte reader
    pub fn analyze_reader<R: Read>(&self, reader: R) -> Result<AnalysisOutcome> {
        let loaded = SeriesLoader::new(&self.channel_map).load_reader(reader)?;
        self.analyze_loaded(loaded.series, loaded.stats)
    }

    /// Analyze raw upload bytes.
    ///
    /// The upload is spooled to a temporary file that is removed on every
    /// exit path, including failures part-way through the analysis.
    pub fn analyze_upload(&self, bytes: &[u8], original_name: &str) -> Result<AnalysisOutcome> {
        let upload = TempUpload::from_bytes(bytes, original_name)?;
        info!("Analyzing upload '{}'", upload.original_name());
        self.analyze_path(upload.path())
    }

    fn analyze_loaded(&self, series: Series, stats: LoadStats) -> Result<AnalysisOutcome> {
        if series.is_empty() {
            return Err(Error::empty_series(
                "no valid rows remain after timestamp normalization",
            ));
        }

        let operating = operating_rows(&series, &self.channel_map)?;
        let summary = analyze_operation(&series, &self.channel_map, self.nominal_voltage)?;
        let kpis = aggregate_kpis(
            &series,
            &operating,
            &self.channel_map,
            &summary,
            self.flow.as_ref(),
        )?;

        let chart_series = if needs_resampling(&series) {
            debug!("series of {} rows exceeds chart budget, downsampling", series.len());
            resample_to_buckets(&series)
        } else {
            series
        };

        let response = AnalysisResponse {
            kpis,
            grafico_tensao: format_chart_group(&chart_series, &self.channel_map, chart_groups::VOLTAGE),
            grafico_corrente: format_chart_group(&chart_series, &self.channel_map, chart_groups::CURRENT),
            grafico_fp: format_chart_group(
                &chart_series,
                &self.channel_map,
                chart_groups::POWER_FACTOR,
            ),
            grafico_nivel: format_chart_group(&chart_series, &self.channel_map, chart_groups::LEVEL),
            grafico_velocidade: format_chart_group(&chart_series, &self.channel_map, chart_groups::SPEED),
        };

        info!(
            "Analysis complete: period {}, {} chart points",
            response.kpis.periodo_analisado,
            chart_series.len()
        );

        Ok(AnalysisOutcome { response, stats })
    }
}
