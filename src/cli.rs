//! Command-line interface.
//!
//! `clap` lives here only; the library works on `Config`.
//!
//! ```bash
//! site_recon scan -u example.com
//! site_recon scan --url https://example.com --type tech --verbose
//! site_recon scan -u example.com -t wp -o report.txt
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, LogFormat, LogLevel, ScanType, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(
    name = "site_recon",
    version,
    about = "Fingerprints the third-party technologies a web page loads."
)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one page and print a reconnaissance report
    Scan(ScanArgs),
}

/// Options for `site_recon scan`.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Target URL (https:// is assumed when no scheme is given)
    #[arg(short = 'u', long)]
    pub url: String,

    /// Sections to produce: full|wp|tech
    #[arg(short = 't', long = "type", value_enum, default_value_t = ScanType::Full)]
    pub scan_type: ScanType,

    /// Add plugin list, timestamp and totals to the report
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long, value_parser)]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// JSON signature catalog to use instead of the built-in one
    #[arg(long, value_parser)]
    pub signatures: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<ScanArgs> for Config {
    fn from(args: ScanArgs) -> Self {
        Config {
            url: args.url,
            scan_type: args.scan_type,
            verbose: args.verbose,
            output: args.output,
            timeout_seconds: args.timeout_seconds,
            user_agent: args.user_agent,
            signatures: args.signatures,
            log_level: args.log_level,
            log_format: args.log_format,
        }
    }
}
