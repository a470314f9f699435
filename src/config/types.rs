//! Configuration types.
//!
//! This module defines enums and structs used for configuration, shared by the
//! library API and the command-line front end.

use std::path::PathBuf;

use clap::ValueEnum;
use thiserror::Error;

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which sections a scan produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ScanType {
    /// Technologies and placeholder vulnerability data
    Full,
    /// Placeholder WordPress vulnerability data only
    Wp,
    /// Technologies only
    Tech,
}

impl ScanType {
    /// Whether the page markup is fingerprinted for this scan type.
    pub fn includes_technologies(self) -> bool {
        matches!(self, ScanType::Full | ScanType::Tech)
    }

    /// Whether placeholder vulnerability data is collected for this scan type.
    pub fn includes_vulnerabilities(self) -> bool {
        matches!(self, ScanType::Full | ScanType::Wp)
    }
}

/// Configuration validation failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No target URL was given.
    #[error("Target URL must not be empty")]
    EmptyUrl,

    /// A zero timeout would fail every request immediately.
    #[error("Timeout must be at least one second")]
    ZeroTimeout,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through the command line.
///
/// # Examples
///
/// ```no_run
/// use site_recon::{Config, ScanType};
///
/// let config = Config {
///     url: "https://example.com".to_string(),
///     scan_type: ScanType::Tech,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Target URL (a missing scheme defaults to https)
    pub url: String,

    /// Sections to produce
    pub scan_type: ScanType,

    /// Include plugin list, timestamp and totals in the report
    pub verbose: bool,

    /// Write the report here instead of stdout
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// JSON signature catalog replacing the built-in one
    pub signatures: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            scan_type: ScanType::Full,
            verbose: false,
            output: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            signatures: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks the values that cannot be expressed through the type system.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl);
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
