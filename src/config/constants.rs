//! Configuration constants.
//!
//! This module defines the fixed vocabularies used by the extraction pass and the
//! derived accessors: selector strings, MIME allow-lists, and fallback values.

// CSS selector strings used by the extraction pass
pub const LINK_SELECTOR_STR: &str = "link";
pub const META_SELECTOR_STR: &str = "meta";
pub const TITLE_SELECTOR_STR: &str = "title";
pub const FIRST_HEADING_SELECTOR_STR: &str = "h1";
pub const JSON_LD_SELECTOR_STR: &str = r#"script[type="application/ld+json"]"#;
/// Top-level microdata items: scoped elements that are not themselves a property.
pub const MICRODATA_ITEM_SELECTOR_STR: &str = "[itemscope]:not([itemprop])";

// Link relations (compared after trim + lowercase)
pub const REL_ICON: &str = "icon";
pub const REL_SHORTCUT_ICON: &str = "shortcut icon";
pub const REL_CANONICAL: &str = "canonical";
pub const REL_ALTERNATE: &str = "alternate";

/// Feed MIME types accepted for `<link rel="alternate">`.
pub const FEED_MIME_TYPES: &[&str] = &[
    "application/rss+xml",
    "application/atom+xml",
    "application/feed+json",
    "application/json",
];

// Favicon ranking
/// Returned by `Metadata::favicon` when the document declares no usable icon.
pub const DEFAULT_FAVICON: &str = "/favicon.ico";
pub const SVG_MIME_TYPE: &str = "image/svg+xml";
pub const PNG_MIME_TYPE: &str = "image/png";
pub const ICO_MIME_TYPE: &str = "image/x-icon";

// Input
/// Input path that selects stdin
pub const STDIN_INPUT: &str = "-";

/// Maximum HTML input size in bytes (16MB)
/// Larger inputs are rejected by the binary before parsing
pub const MAX_HTML_INPUT_SIZE: usize = 16 * 1024 * 1024;

/// Deepest chain of nested microdata items that is extracted.
/// Items nested below this depth are dropped from their parent.
pub const MAX_MICRODATA_DEPTH: usize = 64;

// Microdata value sources, by element name
pub const HREF_ELEMENTS: &[&str] = &["a", "area", "link"];
pub const SRC_ELEMENTS: &[&str] = &["audio", "embed", "iframe", "img", "source", "track", "video"];
pub const DATA_ELEMENTS: &[&str] = &["object"];
pub const VALUE_ELEMENTS: &[&str] = &["data", "meter"];
