//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector, returning `None` if it is invalid.
///
/// Selectors reach `HtmlDocument` as strings through the `Document` trait, so an
/// invalid one is logged and treated as matching nothing rather than panicking.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "query_selector_all")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Option<Selector> {
    match Selector::parse(selector_str) {
        Ok(selector) => Some(selector),
        Err(e) => {
            log::error!(
                "Failed to parse CSS selector '{}' in {}: {}. Matching nothing.",
                selector_str,
                context,
                e
            );
            None
        }
    }
}
