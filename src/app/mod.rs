//! Application helpers shared by the library entry point and the binary.

pub mod url;

// Re-export public API
pub use url::validate_and_normalize_url;
