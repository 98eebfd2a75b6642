//! Minimal HTML entity decoding for attribute values.
//!
//! Only the five XML entities plus `&apos;` and numeric character references are
//! decoded. This is not a full HTML5 entity table.

use regex::{Captures, Regex};
use std::sync::LazyLock;

const ENTITY_PATTERN: &str = r"&(?:#[xX]([0-9a-fA-F]+)|#([0-9]+)|([a-zA-Z]+));";

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ENTITY_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in ENTITY_RE: {}. This is a programming error.",
            ENTITY_PATTERN, e
        )
    })
});

const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
];

fn decode_named(name: &str) -> Option<char> {
    NAMED_ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|(_, ch)| *ch)
}

fn decode_numeric(digits: &str, radix: u32) -> Option<char> {
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
}

/// Decodes named and numeric HTML entities in `input`.
///
/// Unknown named entities and numeric references that do not map to a Unicode
/// scalar value are left untouched.
///
/// # Examples
///
/// ```
/// use page_metadata::decode_html_entities;
///
/// assert_eq!(decode_html_entities("Tom &amp; Jerry&#39;s"), "Tom & Jerry's");
/// assert_eq!(decode_html_entities("&#x263A; &copy;"), "\u{263A} &copy;");
/// ```
pub fn decode_html_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    ENTITY_RE
        .replace_all(input, |caps: &Captures| {
            let decoded = if let Some(hex) = caps.get(1) {
                decode_numeric(hex.as_str(), 16)
            } else if let Some(dec) = caps.get(2) {
                decode_numeric(dec.as_str(), 10)
            } else {
                caps.get(3).and_then(|name| decode_named(name.as_str()))
            };

            match decoded {
                Some(ch) => ch.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
