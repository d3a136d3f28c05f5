//! Inspect command implementation
//!
//! Examines an export file without running a full analysis: resolved
//! columns, mapped channels, row counts and covered period.

use colored::*;

use crate::app::services::series_loader::SeriesLoader;
use crate::cli::args::InspectArgs;
use crate::cli::commands::shared::{load_channel_map, setup_logging};
use crate::constants::PERIOD_DATE_FORMAT;
use crate::Result;

/// Run the inspect command
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let channel_map = load_channel_map(args.mapping.as_deref())?;
    let loaded = SeriesLoader::new(&channel_map).load_path(&args.input)?;
    let series = &loaded.series;
    let stats = &loaded.stats;

    println!("{}", "Export Inspection".bright_green().bold());
    println!("{}", "=================".bright_green());
    println!("File:            {}", args.input.display());
    println!(
        "Records:         {} ({} loaded, {} dropped)",
        stats.total_records.to_string().bright_white().bold(),
        stats.rows_loaded.to_string().bright_white().bold(),
        if stats.rows_dropped > 0 {
            stats.rows_dropped.to_string().bright_red().bold()
        } else {
            "0".bright_white().bold()
        }
    );

    if let (Some(first), Some(last)) = (series.first_timestamp(), series.last_timestamp()) {
        println!(
            "Period:          {} a {}",
            first.format(PERIOD_DATE_FORMAT).to_string().bright_white().bold(),
            last.format(PERIOD_DATE_FORMAT).to_string().bright_white().bold()
        );
    }

    println!("\n{}", "Mapped channels:".bright_green().bold());
    for (channel, column) in channel_map.entries() {
        let status = if series.has_column(column) || channel == "timestamp" {
            "present".bright_white()
        } else {
            "absent".bright_yellow()
        };
        println!("  {:<14} -> {:<12} [{}]", channel, column, status);
    }

    let unmapped: Vec<&str> = series
        .columns()
        .iter()
        .map(String::as_str)
        .filter(|column| !channel_map.entries().any(|(_, mapped)| mapped == *column))
        .collect();
    if !unmapped.is_empty() {
        println!("\n{}", "Unmapped columns:".bright_yellow().bold());
        for column in unmapped {
            println!("  {}", column);
        }
    }

    if !stats.parse_errors.is_empty() {
        println!("\n{}", "Dropped rows (first reasons):".bright_yellow().bold());
        for message in stats.parse_errors.iter().take(10) {
            println!("  {}", message);
        }
    }

    Ok(())
}
