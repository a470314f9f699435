//! Plain-text report formatting.

use strum::IntoEnumIterator;

use crate::config::ScanType;
use crate::vulndb::{Severity, Vulnerabilities};

use super::types::ScanReport;

/// Shown when the technology section has nothing to list.
pub const NO_TECHNOLOGIES: &str = "No technologies detected.";

/// Shown in a full report when no vulnerability data was collected.
pub const NO_VULNERABILITY_DATA: &str = "No vulnerability data available.";

const RULE_WIDTH: usize = 70;
const IDS_PER_LINE: usize = 2;

/// Renders the report as plain text.
///
/// Sections:
/// - technologies: `full` and `tech` scans, one block per category with
///   distinct names sorted alphabetically
/// - vulnerabilities: `full` scans, or `wp` scans whose data is non-empty
///   (a `wp` scan without data omits the section rather than failing)
/// - details: verbose only; plugin list, timestamp and total count
pub fn render_report(report: &ScanReport, verbose: bool) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    out.push_str(&format!("{rule}\n  Site Recon Report\n{rule}\n"));
    out.push_str(&format!("Target:    {}\n", report.target));
    out.push_str(&format!("Scan type: {}\n", report.scan_type));

    if report.scan_type.includes_technologies() {
        render_technologies(&mut out, report);
    }

    if shows_vulnerabilities(report.scan_type, report.vulnerabilities.as_ref()) {
        render_vulnerabilities(&mut out, report);
    } else {
        log::debug!(
            "Vulnerability section omitted for {} scan",
            report.scan_type
        );
    }

    if verbose {
        render_details(&mut out, report);
    }

    out
}

/// `full`, or `wp` with non-empty data. `tech` never shows the section.
fn shows_vulnerabilities(scan_type: ScanType, vulnerabilities: Option<&Vulnerabilities>) -> bool {
    scan_type == ScanType::Full
        || (scan_type == ScanType::Wp && vulnerabilities.is_some_and(|v| !v.is_empty()))
}

fn section_header(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
}

fn render_technologies(out: &mut String, report: &ScanReport) {
    section_header(out, "[+] Detected Technologies");

    let aggregated = report
        .technologies
        .as_ref()
        .map(|result| result.aggregate())
        .unwrap_or_default();

    if aggregated.is_empty() {
        out.push_str(NO_TECHNOLOGIES);
        out.push('\n');
        return;
    }

    for detected in aggregated {
        out.push_str(&format!("{}:\n", detected.category));
        for technology in &detected.technologies {
            out.push_str(&format!("  - {technology}\n"));
        }
    }
}

fn render_vulnerabilities(out: &mut String, report: &ScanReport) {
    section_header(
        out,
        &format!(
            "[!] WordPress Plugin Vulnerabilities ({})",
            report.vulnerability_source
        ),
    );

    let Some(vulnerabilities) = report.vulnerabilities.as_ref().filter(|v| !v.is_empty()) else {
        out.push_str(NO_VULNERABILITY_DATA);
        out.push('\n');
        return;
    };

    for severity in Severity::iter() {
        let ids = vulnerabilities.get(severity);
        if ids.is_empty() {
            continue;
        }
        out.push_str(&format!("{severity} ({}):\n", ids.len()));
        for line in format_severity_lines(ids) {
            out.push_str(&format!("  {line}\n"));
        }
    }
}

fn render_details(out: &mut String, report: &ScanReport) {
    section_header(out, "[*] Scan Details");

    out.push_str("Plugins:\n");
    for plugin in &report.plugins {
        out.push_str(&format!("  - {} {}\n", plugin.slug, plugin.version));
    }
    out.push_str(&format!(
        "Scan completed: {}\n",
        report.scanned_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    let total = report
        .vulnerabilities
        .as_ref()
        .map(Vulnerabilities::total)
        .unwrap_or(0);
    out.push_str(&format!("Total vulnerabilities: {total}\n"));
}

/// Groups identifiers two per line, `", "`-separated.
///
/// With an odd count the last line holds a single identifier and no trailing
/// separator.
pub fn format_severity_lines(ids: &[String]) -> Vec<String> {
    ids.chunks(IDS_PER_LINE).map(|pair| pair.join(", ")).collect()
}
