//! The extraction pass.
//!
//! This module reads a `Document` and fills a `Metadata` snapshot with:
//! - Favicon candidates and icon fallbacks (`<link rel="icon">`)
//! - Meta tags (Open Graph, Twitter Cards, everything else) and OG images/videos
//! - The canonical URL, `<title>` and first `<h1>`
//! - Feeds (`<link rel="alternate">`)
//! - JSON-LD blocks
//! - Microdata items
//!
//! Only a non-document input is an error. Anything malformed inside the page is
//! skipped and logged at `debug` level.

mod html;
mod links;
mod meta;
mod microdata;
mod structured;

use log::debug;

use crate::dom::Document;
use crate::error_handling::{MetadataError, NOT_A_DOCUMENT_MESSAGE};
use crate::metadata::Metadata;

pub use microdata::extract_microdata_item;

/// Runs the extraction pass over `document`.
///
/// # Errors
///
/// Returns `MetadataError::InvalidArgument` if `document` has no document element.
///
/// # Examples
///
/// ```
/// use page_metadata::{extract, HtmlDocument};
/// use scraper::Html;
///
/// let html = Html::parse_document(r#"
///     <head>
///         <meta property="og:title" content="Hello &amp; welcome">
///         <link rel="icon" type="image/svg+xml" href="/icon.svg">
///     </head>
/// "#);
/// let metadata = extract(&HtmlDocument::new(&html)).unwrap();
/// assert_eq!(metadata.title(), Some("Hello & welcome"));
/// assert_eq!(metadata.favicon(), "/icon.svg");
/// ```
pub fn extract<D: Document>(document: &D) -> Result<Metadata, MetadataError> {
    if document.document_element().is_none() {
        return Err(MetadataError::invalid_argument(NOT_A_DOCUMENT_MESSAGE));
    }

    let mut metadata = Metadata::default();
    links::extract_icons(document, &mut metadata);
    meta::extract_meta_tags(document, &mut metadata);
    links::extract_canonical_url(document, &mut metadata);
    html::extract_document_titles(document, &mut metadata);
    links::extract_feeds(document, &mut metadata);
    structured::extract_json_ld(document, &mut metadata);
    microdata::extract_microdata(document, &mut metadata);

    debug!(
        "Extracted {} meta keys, {} favicons, {} feeds, {} images, {} videos, {} JSON-LD values, {} microdata items",
        metadata.meta.len(),
        metadata.favicons.len(),
        metadata.feeds.len(),
        metadata.images.len(),
        metadata.videos.len(),
        metadata.jsonld.len(),
        metadata.microdata.len()
    );

    Ok(metadata)
}
