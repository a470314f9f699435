//! Signature matching over a parsed HTML document.

use log::debug;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::config::{HSTS_HTTP_EQUIV, HSTS_TECHNOLOGY, SECURITY_CATEGORY};
use crate::utils::parse_selector_unsafe;

use super::catalog::SignatureCatalog;
use super::models::MatchResult;

static SCRIPT_SRC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("script[src]", "script source extraction"));
static LINK_HREF_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("link[href]", "link href extraction"));
static META_HTTP_EQUIV_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[http-equiv]", "meta http-equiv extraction"));

/// Scans an HTML document for catalog signatures.
///
/// Every `script[src]` and then every `link[href]` value is lower-cased and
/// attributed to at most one technology (the first match in catalog order).
/// Independently, the first `<meta http-equiv="Strict-Transport-Security">`
/// (any letter case) records `("Security", "HSTS")` exactly once.
///
/// Parsing is permissive: malformed markup never fails, it just yields fewer
/// candidates. An empty result is a valid outcome.
pub fn match_document(html: &str, catalog: &SignatureCatalog) -> MatchResult {
    let document = Html::parse_document(html);
    let mut result = MatchResult::new();

    let scripts = document
        .select(&SCRIPT_SRC_SELECTOR)
        .filter_map(|element| element.value().attr("src"));
    let links = document
        .select(&LINK_HREF_SELECTOR)
        .filter_map(|element| element.value().attr("href"));

    for source in scripts.chain(links) {
        let lowered = source.to_lowercase();
        if let Some((category, technology)) = catalog.first_match(&lowered) {
            debug!("Matched {technology} ({category}) from {source}");
            result.record(category, technology);
        }
    }

    if has_hsts_meta(&document) {
        debug!("Found HSTS meta tag");
        result.record(SECURITY_CATEGORY, HSTS_TECHNOLOGY);
    }

    result
}

/// Whether any `<meta http-equiv>` declares Strict-Transport-Security.
fn has_hsts_meta(document: &Html) -> bool {
    document
        .select(&META_HTTP_EQUIV_SELECTOR)
        .filter_map(|element| element.value().attr("http-equiv"))
        .any(|value| value.eq_ignore_ascii_case(HSTS_HTTP_EQUIV))
}
