//! Error handling.
//!
//! This module provides:
//! - Error type definitions (scan, initialization, catalog)
//! - Categorization of transport failures from `reqwest`
//!
//! Every `ScanError` is terminal: the binary reports it and exits with status 1.

mod categorization;
mod types;

// Re-export public API
pub use categorization::transport_error;
pub use types::{CatalogError, InitializationError, ScanError, TransportErrorKind};
