//! Analyze command implementation
//!
//! Runs one full analysis over an export file and writes the JSON response
//! to stdout or a file, with a colored KPI summary on stderr.

use colored::*;
use tracing::info;

use crate::app::services::instant_analysis::AnalysisOutcome;
use crate::cli::args::AnalyzeArgs;
use crate::cli::commands::shared::{load_channel_map, setup_logging};
use crate::{Error, InstantAnalyzer, Result};

/// Run the analyze command
pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let channel_map = load_channel_map(args.mapping.as_deref())?;
    let analyzer = InstantAnalyzer::new(channel_map).with_nominal_voltage(args.nominal_voltage);

    info!("Analyzing {}", args.input.display());
    let outcome = analyzer.analyze_path(&args.input)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&outcome.response)?
    } else {
        serde_json::to_string(&outcome.response)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .map_err(|e| Error::io(format!("failed to write {}", path.display()), e))?;
            info!("Response written to {}", path.display());
        }
        None => println!("{}", json),
    }

    if !args.quiet {
        print_summary(&outcome);
    }

    Ok(())
}

/// Print a colored KPI summary to stderr
fn print_summary(outcome: &AnalysisOutcome) {
    let kpis = &outcome.response.kpis;

    eprintln!("\n{}", "Analysis Summary".bright_green().bold());
    eprintln!("{}", "================".bright_green());
    eprintln!(
        "Period:          {}",
        kpis.periodo_analisado.bright_white().bold()
    );
    eprintln!(
        "Mean voltage:    {} V",
        format!("{:.1}", kpis.tensao_media).bright_white().bold()
    );
    eprintln!(
        "Mean current:    {} A",
        format!("{:.2}", kpis.corrente_media).bright_white().bold()
    );
    eprintln!(
        "Mean PF:         {}",
        format!("{:.3}", kpis.fp_medio).bright_white().bold()
    );
    eprintln!(
        "Operation:       {}",
        kpis.analise_operacao.bright_white().bold()
    );
    eprintln!(
        "Rows loaded:     {} ({} dropped)",
        outcome.stats.rows_loaded.to_string().bright_white().bold(),
        if outcome.stats.rows_dropped > 0 {
            outcome.stats.rows_dropped.to_string().bright_red().bold()
        } else {
            "0".bright_white().bold()
        }
    );
}
