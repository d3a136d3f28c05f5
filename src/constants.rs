//! Application constants for the motorlog analyzer
//!
//! This module contains all policy constants, default values, canonical
//! channel keys and chart groupings used throughout the analysis engine.

// =============================================================================
// Ingestion
// =============================================================================

/// Field delimiter used by logger exports
pub const CSV_DELIMITER: u8 = b';';

/// Accepted day-first timestamp formats, tried in order
pub const TIMESTAMP_INPUT_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d/%m/%y %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    "%d/%m/%Y",
];

/// Maximum number of per-record parse errors retained in load statistics
pub const MAX_RETAINED_PARSE_ERRORS: usize = 50;

// =============================================================================
// Operating-State Analysis
// =============================================================================

/// Reference current above which a sample counts as "operating" (amperes)
pub const OPERATING_CURRENT_THRESHOLD_AMPS: f64 = 1.0;

/// Default nominal line voltage when none is supplied (volts)
pub const DEFAULT_NOMINAL_VOLTAGE: f64 = 380.0;

/// Half-width of the voltage stability band, as a fraction of nominal.
/// Readings within nominal * (1 ± this) classify as stable.
pub const VOLTAGE_TOLERANCE_FRACTION: f64 = 0.10;

/// Share of classified operating samples outside the band that flips the
/// verdict from "normal" to an under/overvoltage risk
pub const UNSTABLE_VERDICT_FRACTION: f64 = 0.20;

// =============================================================================
// Resampling & Chart Output
// =============================================================================

/// Series longer than this are downsampled before charting
pub const RESAMPLE_MAX_POINTS: usize = 2000;

/// Downsampling bucket width, aligned to wall-clock marks
pub const RESAMPLE_BUCKET_MINUTES: u32 = 15;

/// Chart timestamp format: ISO-8601 local, no timezone
pub const CHART_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Date format used in the analyzed-period KPI string
pub const PERIOD_DATE_FORMAT: &str = "%d/%m/%Y";

// =============================================================================
// Canonical Channel Keys
// =============================================================================

/// Canonical channel keys resolved through the channel map
pub mod channels {
    pub const TIMESTAMP: &str = "timestamp";

    pub const VOLTAGE_A: &str = "tensao_a";
    pub const VOLTAGE_B: &str = "tensao_b";
    pub const VOLTAGE_C: &str = "tensao_c";

    pub const CURRENT_A: &str = "corrente_a";
    pub const CURRENT_B: &str = "corrente_b";
    pub const CURRENT_C: &str = "corrente_c";

    pub const POWER_FACTOR_A: &str = "fp_a";
    pub const POWER_FACTOR_B: &str = "fp_b";
    pub const POWER_FACTOR_C: &str = "fp_c";

    pub const LEVEL: &str = "nivel";
    pub const SPEED: &str = "velocidade";
    pub const FLOW: &str = "vazao";
}

/// Channel groupings emitted as independent chart series
pub mod chart_groups {
    use super::channels;

    pub const VOLTAGE: &[&str] = &[
        channels::VOLTAGE_A,
        channels::VOLTAGE_B,
        channels::VOLTAGE_C,
    ];

    pub const CURRENT: &[&str] = &[
        channels::CURRENT_A,
        channels::CURRENT_B,
        channels::CURRENT_C,
    ];

    pub const POWER_FACTOR: &[&str] = &[
        channels::POWER_FACTOR_A,
        channels::POWER_FACTOR_B,
        channels::POWER_FACTOR_C,
    ];

    pub const LEVEL: &[&str] = &[channels::LEVEL];

    pub const SPEED: &[&str] = &[channels::SPEED];
}

// =============================================================================
// Flow KPI Keys
// =============================================================================

/// KPI keys contributed by the default flow computer
pub mod flow_kpis {
    pub const MEAN_FLOW: &str = "vazao_media";
    pub const MAX_FLOW: &str = "vazao_maxima";
    pub const TOTAL_VOLUME_M3: &str = "volume_total_m3";
}

/// Compute the voltage stability band for a nominal voltage
pub fn voltage_stability_band(nominal_voltage: f64) -> (f64, f64) {
    (
        nominal_voltage * (1.0 - VOLTAGE_TOLERANCE_FRACTION),
        nominal_voltage * (1.0 + VOLTAGE_TOLERANCE_FRACTION),
    )
}
