//! `<meta>` extraction, including the `og:image` / `og:video` structured properties.

use log::{debug, trace};

use crate::config::META_SELECTOR_STR;
use crate::dom::Document;
use crate::metadata::Metadata;
use crate::models::OpenGraphMedia;
use crate::utils::decode_html_entities;

/// Meta attributes that name a value. Both are read from every tag.
const KEY_ATTRIBUTES: [&str; 2] = ["property", "name"];

/// Records every `<meta>` with non-empty content under its `property` and `name` keys.
///
/// A tag carrying both attributes contributes once per attribute, so
/// `<meta property="og:title" name="og:title">` yields two values for `og:title`.
pub(crate) fn extract_meta_tags<D: Document>(document: &D, metadata: &mut Metadata) {
    for meta in document.query_selector_all(META_SELECTOR_STR) {
        let Some(content) = document.attr(meta, "content").filter(|c| !c.is_empty()) else {
            continue;
        };
        let content = decode_html_entities(content);

        for attribute in KEY_ATTRIBUTES {
            let Some(key) = document.attr(meta, attribute).filter(|k| !k.is_empty()) else {
                continue;
            };
            metadata.push_meta(key, &content);
            apply_media_property(metadata, key, &content);
        }
    }
}

/// Builds `images` / `videos` from `og:image*` / `og:video*` keys.
///
/// `og:image` and `og:image:url` start a new image; any other `og:image:<prop>`
/// updates the image started most recently. Properties that arrive before any
/// image are dropped.
fn apply_media_property(metadata: &mut Metadata, key: &str, value: &str) {
    let (entries, rest) = if let Some(rest) = key.strip_prefix("og:image") {
        (&mut metadata.images, rest)
    } else if let Some(rest) = key.strip_prefix("og:video") {
        (&mut metadata.videos, rest)
    } else {
        return;
    };

    match rest {
        "" | ":url" => match OpenGraphMedia::new(value) {
            Ok(media) => entries.push(media),
            Err(e) => debug!("Skipping {key}: {e}"),
        },
        _ => {
            // e.g. "og:images" is an unrelated key
            let Some(property) = rest.strip_prefix(':') else {
                return;
            };
            match entries.last_mut() {
                Some(media) => {
                    if !media.apply_property(property, value) {
                        trace!("Ignoring unsupported structured property {key}");
                    }
                }
                None => debug!("Dropping {key}: no preceding entry to attach it to"),
            }
        }
    }
}
