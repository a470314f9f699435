//! site_recon library: single-page technology fingerprinting
//!
//! This library fetches one web page, matches the `<script src>` and
//! `<link href>` URLs it loads (plus an HSTS `<meta http-equiv>`) against an
//! ordered signature catalog, and renders a plain-text report. The report can
//! also carry a WordPress plugin vulnerability section, which is filled from
//! placeholder data and says so.
//!
//! # Example
//!
//! ```no_run
//! use site_recon::{run_scan, Config, ScanType};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "example.com".to_string(),
//!     scan_type: ScanType::Tech,
//!     ..Default::default()
//! };
//!
//! let outcome = run_scan(config).await?;
//! println!("{} technology records", outcome.report.technologies.map_or(0, |t| t.total_records()));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod cli;
pub mod config;
mod error_handling;
mod fetch;
pub mod fingerprint;
pub mod initialization;
pub mod report;
mod utils;
pub mod vulndb;

// Re-export public API
pub use app::validate_and_normalize_url;
pub use config::{Config, ConfigError, LogFormat, LogLevel, ScanType};
pub use error_handling::{CatalogError, InitializationError, ScanError, TransportErrorKind};
pub use report::{ReportDestination, ScanReport};
pub use run::{run_scan, ScanOutcome};

// Internal run module (contains the scan pipeline)
mod run {
    use anyhow::Context;
    use chrono::Utc;
    use log::info;

    use crate::app::validate_and_normalize_url;
    use crate::config::Config;
    use crate::error_handling::ScanError;
    use crate::fetch::fetch_page;
    use crate::fingerprint::{init_catalog, match_document};
    use crate::initialization::init_client;
    use crate::report::{deliver_report, render_report, ReportDestination, ScanReport};
    use crate::vulndb::{PlaceholderFeed, VulnerabilitySource};

    /// Result of a completed scan.
    #[derive(Debug, Clone)]
    pub struct ScanOutcome {
        /// Data the report was rendered from
        pub report: ScanReport,
        /// Rendered report text
        pub text: String,
        /// Where the report was delivered
        pub destination: ReportDestination,
    }

    /// Runs a scan with the provided configuration.
    ///
    /// Pipeline: normalize the URL, load the catalog, fetch the page, match it
    /// (`full`/`tech`), attach placeholder vulnerability data (`full`/`wp`),
    /// render, then print or write the report.
    ///
    /// The page is fetched for every scan type, so an unreachable target fails
    /// the scan before anything is rendered or written.
    ///
    /// # Errors
    ///
    /// - `ScanError::InvalidUrl` if the target cannot be normalized
    /// - `ScanError::Transport` if the page cannot be fetched
    /// - `ScanError::FileWrite` if the report file cannot be written
    /// - `ScanError::Unexpected` for configuration, catalog or client setup failures
    pub async fn run_scan(config: Config) -> Result<ScanOutcome, ScanError> {
        config.validate().context("Invalid configuration")?;

        let target = validate_and_normalize_url(&config.url)?;
        let catalog =
            init_catalog(config.signatures.as_deref()).context("Failed to load signature catalog")?;
        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let html = fetch_page(&client, &target).await?;

        let technologies = if config.scan_type.includes_technologies() {
            let result = match_document(&html, &catalog);
            info!(
                "Matched {} technology records in {} categories",
                result.total_records(),
                result.categories().len()
            );
            Some(result)
        } else {
            None
        };

        let feed = PlaceholderFeed;
        let vulnerabilities = config
            .scan_type
            .includes_vulnerabilities()
            .then(|| feed.vulnerabilities());

        let report = ScanReport {
            target,
            scan_type: config.scan_type,
            technologies,
            vulnerabilities,
            vulnerability_source: feed.label().to_string(),
            plugins: feed.plugins(),
            scanned_at: Utc::now(),
        };

        let text = render_report(&report, config.verbose);
        let destination = deliver_report(&text, config.output.as_deref()).await?;

        Ok(ScanOutcome {
            report,
            text,
            destination,
        })
    }
}
