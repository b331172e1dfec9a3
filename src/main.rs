//! WeeklyReport - weekly status report generator
//!
//! Collects per-task markdown files, assembles them into one anchored and
//! TOC'd document, renders it to HTML via a remote markdown service, and
//! writes dated output artifacts.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use weeklyreport::cli::{compile, generate, Cli, Commands};
use weeklyreport::error::ReportError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Generate(args) => generate(&args),
        Commands::Compile(args) => compile(&args),
    };

    // Single error boundary: each failure kind gets its own message and
    // exit code.
    if let Err(err) = result {
        if let Some(report_err) = err.downcast_ref::<ReportError>() {
            eprintln!("{}: {}", report_err.label(), report_err);
            std::process::exit(report_err.exit_code());
        }

        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
