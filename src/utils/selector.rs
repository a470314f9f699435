//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses one of the crate's static CSS selectors.
///
/// # Panics
///
/// Panics with `context` in the message if `selector_str` is not valid CSS.
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}
