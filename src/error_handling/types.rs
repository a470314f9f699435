//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for loading a signature catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read signature catalog {}: {source}", path.display())]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or does not follow the catalog schema.
    #[error("Failed to parse signature catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A technology name appears under more than one category (or twice in one).
    #[error("Technology '{technology}' is declared in both '{first}' and '{second}'")]
    DuplicateTechnology {
        /// Technology name
        technology: String,
        /// Category of the first declaration
        first: String,
        /// Category of the repeated declaration
        second: String,
    },

    /// A pattern is empty and would match every source string.
    #[error("Technology '{technology}' in '{category}' has an empty pattern")]
    EmptyPattern {
        /// Category name
        category: String,
        /// Technology name
        technology: String,
    },

    /// A technology the matcher records itself is declared in another category.
    #[error("Technology '{technology}' is reserved for category '{expected}', found in '{category}'")]
    ReservedTechnology {
        /// Technology name
        technology: String,
        /// Category it must be declared in
        expected: String,
        /// Category it was declared in
        category: String,
    },
}

/// Categories of transport failures when fetching the target page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(missing_docs)]
pub enum TransportErrorKind {
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError, // non-2xx response
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError, // includes DNS resolution failures
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TransportErrorKind {
    /// Human-readable label used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorKind::HttpRequestBuilderError => "HTTP request builder error",
            TransportErrorKind::HttpRequestRedirectError => "HTTP request redirect error",
            TransportErrorKind::HttpRequestStatusError => "HTTP request status error",
            TransportErrorKind::HttpRequestTimeoutError => "HTTP request timeout error",
            TransportErrorKind::HttpRequestRequestError => "HTTP request error",
            TransportErrorKind::HttpRequestConnectError => "HTTP request connect error",
            TransportErrorKind::HttpRequestBodyError => "HTTP request body error",
            TransportErrorKind::HttpRequestDecodeError => "HTTP request decode error",
            TransportErrorKind::HttpRequestOtherError => "HTTP request other error",
        }
    }
}

/// Errors that abort a scan.
///
/// Every variant is terminal for the current invocation; the binary reports it
/// and exits with status 1.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The target URL was rejected before any request was made.
    #[error("Invalid target URL '{0}'")]
    InvalidUrl(String),

    /// The page could not be fetched (connection, timeout, non-2xx status, ...).
    #[error("Failed to fetch {url} ({kind}): {source}")]
    Transport {
        /// URL that was requested
        url: String,
        /// Categorized failure
        kind: TransportErrorKind,
        /// Underlying reqwest error
        #[source]
        source: ReqwestError,
    },

    /// The report could not be written to the requested path.
    #[error("Failed to write report to {}: {source}", path.display())]
    FileWrite {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Anything else (catalog loading, client setup, ...).
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ScanError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScanError::InvalidUrl(_)
            | ScanError::Transport { .. }
            | ScanError::FileWrite { .. }
            | ScanError::Unexpected(_) => 1,
        }
    }

    /// Whether this is a failure to reach the target (as opposed to local errors).
    pub fn is_transport(&self) -> bool {
        matches!(self, ScanError::InvalidUrl(_) | ScanError::Transport { .. })
    }
}
