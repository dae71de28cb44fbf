use chrono::Local;
use clap::Parser;
use mdstamp::cli::Args;
use mdstamp::output::display_summary;
use mdstamp::progress::Progress;
use mdstamp::{logging, orchestrator, AppError, RenamerConfig};
use tracing::{debug, error};

fn main() {
    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run() -> Result<(), AppError> {
    let config = RenamerConfig::default();
    let today = Local::now().date_naive();
    let mut progress = Progress::new();

    debug!(folders = ?config.target_folders, %today, "Configuration loaded");

    let summary = orchestrator::run(&config, today, &mut progress);

    display_summary(&summary, progress.writer())
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    match summary.into_first_failure() {
        Some((_, e)) => Err(e.into()),
        None => Ok(()),
    }
}
