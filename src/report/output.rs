//! Report delivery and the terminal banner.

use std::path::{Path, PathBuf};

use colored::*;
use log::info;

use crate::error_handling::ScanError;

/// Where a report ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    /// Printed to standard output
    Stdout,
    /// Written (overwriting) to this file
    File(PathBuf),
}

/// Writes the report to `output` as UTF-8, or prints it to stdout.
///
/// # Errors
///
/// Returns `ScanError::FileWrite` if the file cannot be created or written.
pub async fn deliver_report(
    text: &str,
    output: Option<&Path>,
) -> Result<ReportDestination, ScanError> {
    match output {
        Some(path) => {
            tokio::fs::write(path, text.as_bytes())
                .await
                .map_err(|source| ScanError::FileWrite {
                    path: path.to_path_buf(),
                    source,
                })?;
            info!("Report written to {}", path.display());
            Ok(ReportDestination::File(path.to_path_buf()))
        }
        None => {
            print!("{text}");
            Ok(ReportDestination::Stdout)
        }
    }
}

/// Decorative banner printed before the report (terminal only).
pub fn banner() -> String {
    let title = format!(
        "  site_recon v{} :: page technology fingerprinting",
        env!("CARGO_PKG_VERSION")
    );
    let rule = "~".repeat(title.len() + 2);
    format!(
        "{}\n{}\n{}\n{}\n",
        rule.cyan(),
        title.bold(),
        "  vulnerability listings are placeholder data".yellow(),
        rule.cyan()
    )
}
