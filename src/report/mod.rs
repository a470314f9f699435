//! Report rendering and delivery.
//!
//! This module turns a `ScanReport` into the human-readable text report and
//! writes it to a file or stdout. Rendering is total: absent inputs degrade to
//! placeholder lines or omitted sections, never to errors.

mod format;
mod output;
mod types;

// Re-export public API
pub use format::{format_severity_lines, render_report, NO_TECHNOLOGIES, NO_VULNERABILITY_DATA};
pub use output::{banner, deliver_report, ReportDestination};
pub use types::ScanReport;
