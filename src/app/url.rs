//! Target URL validation and normalization.

use log::warn;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ScanError;

/// Validates and normalizes the scan target.
///
/// Adds an `https://` prefix if the input has no scheme at all, then checks
/// that the result parses as an http/https URL (scheme in any letter case),
/// has a host and stays within `MAX_URL_LENGTH`. Any other scheme is rejected.
/// The normalized string (not the re-serialized `Url`) is returned so the
/// report shows the target the way it was given.
///
/// # Errors
///
/// Returns `ScanError::InvalidUrl` carrying the original input.
pub fn validate_and_normalize_url(url: &str) -> Result<String, ScanError> {
    let trimmed = url.trim();
    let invalid = || ScanError::InvalidUrl(url.to_string());

    if trimmed.is_empty() {
        warn!("Rejecting empty target URL");
        return Err(invalid());
    }

    let normalized = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    // Checked after normalization since the prefix can push it over
    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            normalized.chars().take(50).collect::<String>()
        );
        return Err(invalid());
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => match (parsed.scheme(), parsed.host_str()) {
            ("http" | "https", Some(host)) if !host.is_empty() => Ok(normalized),
            ("http" | "https", _) => {
                warn!("Rejecting URL without a usable host: {url}");
                Err(invalid())
            }
            (scheme, _) => {
                warn!("Rejecting unsupported scheme '{scheme}' for URL: {url}");
                Err(invalid())
            }
        },
        Err(e) => {
            warn!("Rejecting invalid URL {url}: {e}");
            Err(invalid())
        }
    }
}

/// Whether `url` starts with `<scheme>://` (RFC 3986 scheme characters).
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
