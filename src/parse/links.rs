//! `<link>` extraction: favicons, the canonical URL, and feeds.

use log::{debug, trace};

use crate::config::{
    FEED_MIME_TYPES, LINK_SELECTOR_STR, REL_ALTERNATE, REL_CANONICAL, REL_ICON, REL_SHORTCUT_ICON,
};
use crate::dom::Document;
use crate::metadata::Metadata;
use crate::models::{Favicon, Feed};
use crate::utils::non_empty;

/// Normalized `rel` and trimmed `href` of a link, when both are non-empty.
fn rel_and_href<D: Document>(document: &D, link: D::Node) -> Option<(String, &str)> {
    let rel = non_empty(document.attr(link, "rel"))?.to_ascii_lowercase();
    let href = non_empty(document.attr(link, "href"))?;
    Some((rel, href))
}

/// Records every `icon` / `shortcut icon` link as a favicon candidate.
///
/// The first href of each relation is also kept as a last-resort fallback.
pub(crate) fn extract_icons<D: Document>(document: &D, metadata: &mut Metadata) {
    for link in document.query_selector_all(LINK_SELECTOR_STR) {
        let Some((rel, href)) = rel_and_href(document, link) else {
            continue;
        };

        let first_href = match rel.as_str() {
            REL_ICON => &mut metadata.icon_href,
            REL_SHORTCUT_ICON => &mut metadata.shortcut_icon_href,
            _ => continue,
        };
        first_href.get_or_insert_with(|| href.to_string());

        let icon_type = non_empty(document.attr(link, "type")).map(str::to_string);
        let sizes = non_empty(document.attr(link, "sizes")).map(str::to_string);
        match Favicon::new(href, Some(rel), icon_type, sizes) {
            Ok(favicon) => {
                trace!("Found favicon candidate {}", favicon.href());
                metadata.favicons.push(favicon);
            }
            Err(e) => debug!("Skipping favicon link: {e}"),
        }
    }
}

/// Keeps the href of the first `<link rel="canonical">` that has one.
pub(crate) fn extract_canonical_url<D: Document>(document: &D, metadata: &mut Metadata) {
    metadata.canonical_url = document
        .query_selector_all(LINK_SELECTOR_STR)
        .into_iter()
        .filter_map(|link| rel_and_href(document, link))
        .find(|(rel, _)| rel == REL_CANONICAL)
        .map(|(_, href)| href.to_string());
}

/// Returns the trimmed feed type if it is one of the accepted feed MIME types.
fn feed_type<D: Document>(document: &D, link: D::Node) -> Option<&str> {
    let feed_type = non_empty(document.attr(link, "type"))?;
    FEED_MIME_TYPES
        .iter()
        .any(|mime| feed_type.eq_ignore_ascii_case(mime))
        .then_some(feed_type)
}

/// Records `<link rel="alternate">` elements that advertise a feed.
pub(crate) fn extract_feeds<D: Document>(document: &D, metadata: &mut Metadata) {
    for link in document.query_selector_all(LINK_SELECTOR_STR) {
        let Some((rel, href)) = rel_and_href(document, link) else {
            continue;
        };
        if rel != REL_ALTERNATE {
            continue;
        }
        let Some(mime) = feed_type(document, link) else {
            trace!("Ignoring alternate link {href}: not a feed type");
            continue;
        };

        let title = non_empty(document.attr(link, "title")).map(str::to_string);
        match Feed::new(href, title, Some(mime.to_string())) {
            Ok(feed) => metadata.feeds.push(feed),
            Err(e) => debug!("Skipping feed link: {e}"),
        }
    }
}
