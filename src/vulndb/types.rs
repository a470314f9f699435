//! Vulnerability data types.

use strum_macros::{Display, EnumIter};

/// Severity buckets shown in the report, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Severity {
    /// Critical severity
    Critical,
    /// High severity
    High,
    /// Medium severity
    Medium,
}

/// Vulnerability identifiers grouped by severity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vulnerabilities {
    /// Critical identifiers, in source order
    pub critical: Vec<String>,
    /// High identifiers, in source order
    pub high: Vec<String>,
    /// Medium identifiers, in source order
    pub medium: Vec<String>,
}

impl Vulnerabilities {
    /// Identifiers for one severity.
    pub fn get(&self, severity: Severity) -> &[String] {
        match severity {
            Severity::Critical => &self.critical,
            Severity::High => &self.high,
            Severity::Medium => &self.medium,
        }
    }

    /// Whether every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.critical.is_empty() && self.high.is_empty() && self.medium.is_empty()
    }

    /// Sum of the bucket lengths (identifiers are not deduplicated).
    pub fn total(&self) -> usize {
        self.critical.len() + self.high.len() + self.medium.len()
    }
}

/// A plugin slug and version listed in verbose reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginVersion {
    /// Plugin slug (e.g. "contact-form-7")
    pub slug: String,
    /// Version string
    pub version: String,
}

/// Provider of the vulnerability section's data.
pub trait VulnerabilitySource {
    /// Label shown in the report next to the data.
    fn label(&self) -> &'static str;

    /// Identifiers grouped by severity.
    fn vulnerabilities(&self) -> Vulnerabilities;

    /// Plugin/version list shown in verbose reports.
    fn plugins(&self) -> Vec<PluginVersion>;
}
