//! WordPress plugin vulnerability data for the report.
//!
//! The only source shipped is [`PlaceholderFeed`], which returns fixed demo
//! identifiers. It is not a vulnerability feed integration: nothing it returns
//! is derived from the scanned site or its plugin versions.

mod placeholder;
mod types;

// Re-export public API
pub use placeholder::PlaceholderFeed;
pub use types::{PluginVersion, Severity, Vulnerabilities, VulnerabilitySource};
