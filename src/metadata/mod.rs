//! The metadata snapshot and its derived accessors.
//!
//! A `Metadata` value is filled once by `extract` and then only read. Derived
//! values (`title`, `favicon`, ...) are recomputed on each call from the stored
//! fields; nothing is cached.

mod favicon;
mod open_graph;
mod summary;

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::{Favicon, Feed, Image, MicrodataItem, Video};

pub use summary::MetadataSummary;

const TITLE_KEYS: &[&str] = &["og:title", "twitter:title", "title"];
const DESCRIPTION_KEYS: &[&str] = &["og:description", "twitter:description", "description"];
const IMAGE_KEYS: &[&str] = &["og:image", "twitter:image", "image"];
const URL_KEYS: &[&str] = &["og:url", "twitter:url", "url"];
// twitter:site is a handle, not a site name
const SITE_NAME_KEYS: &[&str] = &["og:site_name", "site_name"];

/// Everything one extraction pass found in a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Meta tag values keyed by the raw `property` / `name` attribute, in document order.
    pub meta: IndexMap<String, Vec<String>>,
    /// First `<link rel="icon">` href.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_href: Option<String>,
    /// First `<link rel="shortcut icon">` href.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut_icon_href: Option<String>,
    /// Text of the first `<title>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text: Option<String>,
    /// Text of the first `<h1>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_heading_text: Option<String>,
    /// href of the first `<link rel="canonical">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    pub feeds: Vec<Feed>,
    pub images: Vec<Image>,
    pub videos: Vec<Video>,
    pub favicons: Vec<Favicon>,
    pub jsonld: Vec<serde_json::Value>,
    pub microdata: Vec<MicrodataItem>,
}

impl Metadata {
    /// All values recorded for a meta key, in document order.
    pub fn meta_values(&self, key: &str) -> &[String] {
        self.meta.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// First value recorded for a meta key.
    pub fn first_meta(&self, key: &str) -> Option<&str> {
        self.meta_values(key).first().map(String::as_str)
    }

    fn first_meta_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.first_meta(key))
    }

    /// `og:title`, then `twitter:title`, `title`, the `<title>` text, and the first `<h1>`.
    pub fn title(&self) -> Option<&str> {
        self.first_meta_of(TITLE_KEYS)
            .or(self.title_text.as_deref())
            .or(self.first_heading_text.as_deref())
    }

    /// `og:description`, then `twitter:description`, then `description`.
    pub fn description(&self) -> Option<&str> {
        self.first_meta_of(DESCRIPTION_KEYS)
    }

    /// `og:image`, then `twitter:image`, then `image`.
    pub fn image(&self) -> Option<&str> {
        self.first_meta_of(IMAGE_KEYS)
    }

    /// `og:url`, then `twitter:url`, then `url`.
    pub fn url(&self) -> Option<&str> {
        self.first_meta_of(URL_KEYS)
    }

    /// `og:site_name`, then `site_name`.
    pub fn site_name(&self) -> Option<&str> {
        self.first_meta_of(SITE_NAME_KEYS)
    }

    pub fn canonical_url(&self) -> Option<&str> {
        self.canonical_url.as_deref()
    }

    /// Appends a meta value under `key`.
    pub(crate) fn push_meta(&mut self, key: &str, value: &str) {
        self.meta
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }
}
