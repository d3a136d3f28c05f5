//! Core data structures for instantaneous analysis.
//!
//! Defines the normalized time-indexed series, the KPI set and the
//! chart-ready point structures shared across the analysis services.

use crate::constants::CHART_TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One ingested record: a timestamp plus an open set of named channel values.
///
/// Missing channel readings are absent from the map, never stored as zero or
/// NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow {
    pub timestamp: NaiveDateTime,
    pub values: BTreeMap<String, f64>,
}

impl SampleRow {
    pub fn new(timestamp: NaiveDateTime, values: BTreeMap<String, f64>) -> Self {
        Self { timestamp, values }
    }

    /// Reading for a literal column, if present in this row
    pub fn value(&self, column: &str) -> Option<f64> {
        self.values.get(column).copied()
    }
}

/// An ordered-by-time sequence of sample rows.
///
/// Timestamps are non-decreasing after construction (stable sort, so input
/// order is preserved among ties). The column set records every data column
/// seen in the source header; a column with no parseable readings is still
/// "present" for chart-group resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    rows: Vec<SampleRow>,
    columns: BTreeSet<String>,
}

impl Series {
    /// Build a series, sorting rows ascending by timestamp
    pub fn new(mut rows: Vec<SampleRow>, columns: BTreeSet<String>) -> Self {
        rows.sort_by_key(|row| row.timestamp);
        Self { rows, columns }
    }

    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the source header carried this literal column
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(column)
    }

    pub fn columns(&self) -> &BTreeSet<String> {
        &self.columns
    }

    pub fn first_timestamp(&self) -> Option<NaiveDateTime> {
        self.rows.first().map(|row| row.timestamp)
    }

    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.rows.last().map(|row| row.timestamp)
    }

    /// Present readings of one column, in time order
    pub fn channel_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.rows.iter().filter_map(move |row| row.value(column))
    }
}

/// One chart-ready record: an ISO-8601 local timestamp plus one field per
/// resolved channel. Missing readings serialize as explicit nulls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub timestamp: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, Option<f64>>,
}

impl ChartPoint {
    /// Build a chart point from a sample row restricted to the given columns
    pub fn from_row(row: &SampleRow, columns: &[&str]) -> Self {
        Self {
            timestamp: row.timestamp.format(CHART_TIMESTAMP_FORMAT).to_string(),
            values: columns
                .iter()
                .map(|column| (column.to_string(), row.value(column)))
                .collect(),
        }
    }
}

/// Ordered chart series for one channel group
pub type ChartSeries = Vec<ChartPoint>;

/// Scalar summary statistics for one analysis request.
///
/// The three reference means default to 0.0 (never null or NaN) when no
/// operating interval exists. Flow-derived KPIs are flattened alongside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSet {
    pub tensao_media: f64,
    pub corrente_media: f64,
    pub fp_medio: f64,
    pub periodo_analisado: String,
    pub analise_operacao: String,
    #[serde(flatten)]
    pub extras: BTreeMap<String, f64>,
}

/// Full response of the instantaneous analysis engine.
///
/// Chart groups with no source columns are `None` and serialize as `null`,
/// letting the client distinguish "no data available" from an empty result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    pub kpis: KpiSet,
    pub grafico_tensao: Option<ChartSeries>,
    pub grafico_corrente: Option<ChartSeries>,
    pub grafico_fp: Option<ChartSeries>,
    pub grafico_nivel: Option<ChartSeries>,
    pub grafico_velocidade: Option<ChartSeries>,
}
