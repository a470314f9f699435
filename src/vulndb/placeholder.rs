//! Fixed demo vulnerability data.

use super::types::{PluginVersion, Vulnerabilities, VulnerabilitySource};

const CRITICAL: &[&str] = &["CVE-2023-28121", "CVE-2023-32243", "CVE-2024-27956"];

const HIGH: &[&str] = &[
    "CVE-2023-6553",
    "CVE-2023-40000",
    "CVE-2024-1071",
    "CVE-2024-2879",
];

const MEDIUM: &[&str] = &[
    "CVE-2023-2732",
    "CVE-2023-3460",
    "CVE-2023-5360",
    "CVE-2024-0590",
    "CVE-2024-3495",
];

const PLUGINS: &[(&str, &str)] = &[
    ("contact-form-7", "5.7.6"),
    ("elementor", "3.13.2"),
    ("woocommerce", "7.7.0"),
    ("wordfence", "7.9.3"),
    ("yoast-seo", "20.8"),
];

/// Placeholder vulnerability source.
///
/// Always returns the same identifiers and plugin list regardless of the
/// target. Useful for demonstrating the report layout only.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderFeed;

impl VulnerabilitySource for PlaceholderFeed {
    fn label(&self) -> &'static str {
        "placeholder data, not derived from the target"
    }

    fn vulnerabilities(&self) -> Vulnerabilities {
        let owned = |ids: &[&str]| -> Vec<String> { ids.iter().map(|id| id.to_string()).collect() };
        Vulnerabilities {
            critical: owned(CRITICAL),
            high: owned(HIGH),
            medium: owned(MEDIUM),
        }
    }

    fn plugins(&self) -> Vec<PluginVersion> {
        PLUGINS
            .iter()
            .map(|(slug, version)| PluginVersion {
                slug: slug.to_string(),
                version: version.to_string(),
            })
            .collect()
    }
}
