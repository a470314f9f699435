//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, detection labels)
//! - The library `Config` struct and its option enums

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigError, LogFormat, LogLevel, ScanType};
