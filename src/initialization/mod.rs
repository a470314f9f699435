//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a scan:
//! - Logger (plain or JSON)
//! - HTTP client (timeout and User-Agent from `Config`)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
