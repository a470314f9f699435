//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including request defaults, input limits, and well-known detection labels.

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for the page request.
///
/// Mimics a desktop Chrome browser so that sites serving different markup to
/// bots still return the page a visitor would see.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum URL length (2048 characters).
/// Matches common browser and server limits (e.g., Apache, Nginx defaults).
pub const MAX_URL_LENGTH: usize = 2048;

/// Category recorded when the page declares HSTS through a meta tag.
pub const SECURITY_CATEGORY: &str = "Security";

/// Technology recorded when the page declares HSTS through a meta tag.
pub const HSTS_TECHNOLOGY: &str = "HSTS";

/// `http-equiv` value (lower-cased) that marks an HSTS meta tag.
pub const HSTS_HTTP_EQUIV: &str = "strict-transport-security";
