//! Command-line argument definitions for the motorlog analyzer
//!
//! Defines the complete CLI interface using the clap derive API.

use crate::constants::DEFAULT_NOMINAL_VOLTAGE;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the motorlog analyzer
///
/// Analyzes electrical time-series exports from field-installed motor
/// monitoring loggers: operating-state classification, operational KPIs and
/// chart-ready series.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "motorlog-analyzer",
    version,
    about = "Analyze electrical time-series exports from motor monitoring loggers",
    long_about = "Analyzes semicolon-delimited sensor exports from field-installed motor \
                  monitoring loggers. Cleans and normalizes day-first timestamped series, \
                  classifies operating vs. idle intervals, computes operational KPIs and \
                  emits chart-ready JSON series downsampled for plotting."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the motorlog analyzer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run a full analysis and emit the JSON response (default command)
    Analyze(AnalyzeArgs),
    /// Inspect an export file: columns, mapped channels, row counts
    Inspect(InspectArgs),
}

/// Arguments for the analyze command (full analysis with JSON output)
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Input path to the semicolon-delimited logger export
    #[arg(value_name = "FILE", help = "Path to the logger export file")]
    pub input: PathBuf,

    /// Nominal line voltage for stability classification
    ///
    /// The voltage stability band is ±10% around this value.
    #[arg(
        long = "nominal-voltage",
        value_name = "VOLTS",
        default_value_t = DEFAULT_NOMINAL_VOLTAGE,
        help = "Nominal line voltage for stability classification"
    )]
    pub nominal_voltage: f64,

    /// Path to a JSON channel mapping file
    ///
    /// A JSON object mapping canonical channel keys to literal column headers,
    /// e.g. {"timestamp": "Data/Hora", "corrente_a": "AIRMS"}. If not
    /// specified, the default logger export layout is assumed.
    #[arg(
        short = 'm',
        long = "mapping",
        value_name = "FILE",
        help = "Path to a JSON channel mapping file"
    )]
    pub mapping: Option<PathBuf>,

    /// Output file for the JSON response
    ///
    /// If not specified, the response is written to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for the JSON response"
    )]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON response
    #[arg(long = "pretty", help = "Pretty-print the JSON response")]
    pub pretty: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (export file examination)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input path to the semicolon-delimited logger export
    #[arg(value_name = "FILE", help = "Path to the logger export file")]
    pub input: PathBuf,

    /// Path to a JSON channel mapping file
    #[arg(
        short = 'm',
        long = "mapping",
        value_name = "FILE",
        help = "Path to a JSON channel mapping file"
    )]
    pub mapping: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<Commands> {
        self.command.clone()
    }
}

impl AnalyzeArgs {
    /// Validate the analyze command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        if !self.nominal_voltage.is_finite() || self.nominal_voltage <= 0.0 {
            return Err(Error::configuration(
                "Nominal voltage must be a positive number".to_string(),
            ));
        }

        if let Some(mapping) = &self.mapping {
            if !mapping.exists() {
                return Err(Error::configuration(format!(
                    "Mapping file does not exist: {}",
                    mapping.display()
                )));
            }
        }

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if let Some(mapping) = &self.mapping {
            if !mapping.exists() {
                return Err(Error::configuration(format!(
                    "Mapping file does not exist: {}",
                    mapping.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
