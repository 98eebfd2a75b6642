use serde::Serialize;

use crate::error_handling::MetadataError;

/// A syndication feed advertised with `<link rel="alternate">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feed {
    href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    feed_type: Option<String>,
}

impl Feed {
    /// Creates a feed record.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::InvalidArgument` if `href` is empty.
    pub fn new(
        href: impl Into<String>,
        title: Option<String>,
        feed_type: Option<String>,
    ) -> Result<Self, MetadataError> {
        let href = href.into();
        if href.is_empty() {
            return Err(MetadataError::invalid_argument("Feed href is required."));
        }
        Ok(Self {
            href,
            title,
            feed_type,
        })
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The declared MIME type (e.g. `application/rss+xml`).
    pub fn feed_type(&self) -> Option<&str> {
        self.feed_type.as_deref()
    }
}
