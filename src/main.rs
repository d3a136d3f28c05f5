use clap::Parser;
use motorlog_analyzer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            // Input and configuration mistakes the caller can fix exit 2,
            // everything else exits 1
            let code = if error.is_user_correctable() { 2 } else { 1 };
            process::exit(code);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Motorlog Analyzer - Motor Monitoring Export Analysis");
    println!("====================================================");
    println!();
    println!("Analyze semicolon-delimited electrical time-series exports from");
    println!("field-installed motor monitoring loggers: operating-state");
    println!("classification, operational KPIs and chart-ready JSON series.");
    println!();
    println!("USAGE:");
    println!("    motorlog-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Run a full analysis and emit the JSON response (main command)");
    println!("    inspect     Inspect an export file: columns, mapped channels, row counts");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Analyze an export with the default channel mapping:");
    println!("    motorlog-analyzer analyze export.csv");
    println!();
    println!("    # Analyze with a custom mapping and pretty JSON output:");
    println!("    motorlog-analyzer analyze export.csv --mapping channels.json --pretty");
    println!();
    println!("    # Inspect an export before analyzing it:");
    println!("    motorlog-analyzer inspect export.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    motorlog-analyzer <COMMAND> --help");
}
