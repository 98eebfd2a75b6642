//! Utility functions.
//!
//! This module provides:
//! - HTML entity decoding for attribute values
//! - CSS selector parsing utilities
//! - Whitespace token helpers for space-separated attribute values

mod entities;
mod selector;

pub use entities::decode_html_entities;
pub use selector::parse_selector_with_fallback;

/// Splits a space-separated attribute value (`itemprop`, `itemtype`, `itemref`, `sizes`).
pub fn split_tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split_ascii_whitespace()
}

/// Trims an attribute value, returning `None` when nothing is left.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
