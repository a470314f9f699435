//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_recon` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - The banner and user-facing error output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_recon::cli::{Cli, Command};
use site_recon::initialization::init_logger_with;
use site_recon::report::banner;
use site_recon::{run_scan, Config, ReportDestination};

#[tokio::main]
async fn main() -> Result<()> {
    let Cli { command } = Cli::parse();
    let config = match command {
        Command::Scan(args) => Config::from(args),
    };

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    println!("{}", banner());

    match run_scan(config).await {
        Ok(outcome) => {
            if let ReportDestination::File(path) = outcome.destination {
                println!("Report written to {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("site_recon error: {:#}", e);
            process::exit(e.exit_code());
        }
    }
}
