//! Report data.

use chrono::{DateTime, Utc};

use crate::config::ScanType;
use crate::fingerprint::MatchResult;
use crate::vulndb::{PluginVersion, Vulnerabilities};

/// Everything a rendered report shows.
///
/// `technologies` and `vulnerabilities` are independent: the vulnerability data
/// comes from a placeholder source and has no relationship to the page.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Normalized target URL
    pub target: String,
    /// Sections requested
    pub scan_type: ScanType,
    /// Matcher output (`None` when technologies were not scanned)
    pub technologies: Option<MatchResult>,
    /// Vulnerability identifiers (`None` when not collected)
    pub vulnerabilities: Option<Vulnerabilities>,
    /// Label of the vulnerability source, shown next to its section
    pub vulnerability_source: String,
    /// Plugin/version list shown in verbose reports
    pub plugins: Vec<PluginVersion>,
    /// When the page was scanned
    pub scanned_at: DateTime<Utc>,
}
