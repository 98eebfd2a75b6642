//! Open Graph image and video records.

use serde::Serialize;

use crate::error_handling::MetadataError;

/// An `og:image` or `og:video` entry with its structured properties.
///
/// `width` and `height` keep the raw attribute text; pages routinely put
/// non-numeric values there and the record does not second-guess them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphMedia {
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) secure_url: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub(crate) media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) alt: Option<String>,
}

/// An `og:image` entry.
pub type Image = OpenGraphMedia;
/// An `og:video` entry.
pub type Video = OpenGraphMedia;

impl OpenGraphMedia {
    /// Creates a media record with only its URL set.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::InvalidArgument` if `url` is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, MetadataError> {
        let url = url.into();
        if url.is_empty() {
            return Err(MetadataError::invalid_argument("Media url is required."));
        }
        Ok(Self {
            url,
            secure_url: None,
            media_type: None,
            width: None,
            height: None,
            alt: None,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn secure_url(&self) -> Option<&str> {
        self.secure_url.as_deref()
    }

    /// The declared MIME type (`og:image:type`).
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn width(&self) -> Option<&str> {
        self.width.as_deref()
    }

    pub fn height(&self) -> Option<&str> {
        self.height.as_deref()
    }

    pub fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }

    /// Applies a structured property (`secure_url`, `type`, `width`, `height`, `alt`).
    ///
    /// Returns `false` for properties this record does not carry.
    pub(crate) fn apply_property(&mut self, property: &str, value: &str) -> bool {
        let slot = match property {
            "secure_url" => &mut self.secure_url,
            "type" => &mut self.media_type,
            "width" => &mut self.width,
            "height" => &mut self.height,
            "alt" => &mut self.alt,
            _ => return false,
        };
        *slot = Some(value.to_string());
        true
    }
}
