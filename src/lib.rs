//! page_metadata library: link-preview and structured metadata extraction
//!
//! This library reads a parsed HTML document and captures its metadata in one
//! pass: meta tags (Open Graph, Twitter Cards and the rest), favicons, feeds,
//! the canonical URL, JSON-LD blocks and microdata items. A `Metadata` snapshot
//! then resolves the usual link-preview fields (title, description, image, url,
//! site name, favicon) through fixed fallback chains.
//!
//! The document is read through the `Document` trait, so any DOM can be plugged
//! in. `HtmlDocument` binds the trait to `scraper`.
//!
//! # Example
//!
//! ```
//! use page_metadata::extract_html;
//!
//! let metadata = extract_html(r#"
//!     <html><head>
//!         <title>Fallback title</title>
//!         <meta property="og:site_name" content="Example">
//!         <meta name="twitter:description" content="A page">
//!         <link rel="icon" type="image/png" sizes="16x16" href="/16.png">
//!         <link rel="icon" type="image/png" sizes="64x64" href="/64.png">
//!         <link rel="alternate" type="application/rss+xml" href="/feed.xml">
//!     </head></html>
//! "#).unwrap();
//!
//! assert_eq!(metadata.title(), Some("Fallback title"));
//! assert_eq!(metadata.description(), Some("A page"));
//! assert_eq!(metadata.site_name(), Some("Example"));
//! assert_eq!(metadata.favicon(), "/64.png");
//! assert_eq!(metadata.feeds[0].href(), "/feed.xml");
//! ```

pub mod app;
pub mod config;
mod dom;
mod error_handling;
pub mod initialization;
mod metadata;
mod models;
mod parse;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dom::{Document, ElementId, HtmlDocument};
pub use error_handling::{InitializationError, MetadataError};
pub use metadata::{Metadata, MetadataSummary};
pub use models::{
    Favicon, Feed, Image, MicrodataItem, MicrodataValue, OneOrMany, OpenGraphMedia, Video,
};
pub use parse::{extract, extract_microdata_item};
pub use utils::decode_html_entities;

/// Parses `html` with `scraper` and runs `extract` over it.
///
/// # Errors
///
/// Returns `MetadataError::InvalidArgument` if the parsed tree has no document element.
pub fn extract_html(html: &str) -> Result<Metadata, MetadataError> {
    let document = scraper::Html::parse_document(html);
    extract(&HtmlDocument::new(&document))
}
