//! Favicon candidates declared with `<link rel="icon">` / `<link rel="shortcut icon">`.

use serde::Serialize;

use crate::error_handling::MetadataError;

/// A favicon candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Favicon {
    href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rel: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    icon_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sizes: Option<String>,
}

impl Favicon {
    /// Creates a favicon record.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::InvalidArgument` if `href` is empty.
    pub fn new(
        href: impl Into<String>,
        rel: Option<String>,
        icon_type: Option<String>,
        sizes: Option<String>,
    ) -> Result<Self, MetadataError> {
        let href = href.into();
        if href.is_empty() {
            return Err(MetadataError::invalid_argument("Favicon href is required."));
        }
        Ok(Self {
            href,
            rel,
            icon_type,
            sizes,
        })
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn rel(&self) -> Option<&str> {
        self.rel.as_deref()
    }

    /// The declared MIME type (e.g. `image/png`).
    pub fn icon_type(&self) -> Option<&str> {
        self.icon_type.as_deref()
    }

    /// The raw `sizes` attribute (e.g. `"16x16 32x32"`).
    pub fn sizes(&self) -> Option<&str> {
        self.sizes.as_deref()
    }

    /// Lower-cased file extension of `href`, ignoring any query string or fragment.
    ///
    /// ```
    /// use page_metadata::Favicon;
    ///
    /// let icon = Favicon::new("/static/Icon.PNG?v=3", None, None, None).unwrap();
    /// assert_eq!(icon.extname().as_deref(), Some("png"));
    ///
    /// let icon = Favicon::new("/icons.d/favicon", None, None, None).unwrap();
    /// assert_eq!(icon.extname(), None);
    /// ```
    pub fn extname(&self) -> Option<String> {
        let path = self
            .href
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let file_name = path.rsplit('/').next().unwrap_or_default();
        let (_, ext) = file_name.rsplit_once('.')?;
        (!ext.is_empty()).then(|| ext.to_ascii_lowercase())
    }

    /// Returns `true` if the declared type (case-insensitive) equals `mime`.
    pub(crate) fn has_type(&self, mime: &str) -> bool {
        self.icon_type
            .as_deref()
            .is_some_and(|t| t.trim().eq_ignore_ascii_case(mime))
    }

    /// Returns `true` if the extension equals `ext`.
    pub(crate) fn has_extension(&self, ext: &str) -> bool {
        self.extname().as_deref() == Some(ext)
    }

    /// Largest `W*H` area among the `sizes` tokens, ignoring unparsable ones (`any`).
    pub(crate) fn largest_declared_area(&self) -> Option<u64> {
        self.sizes
            .as_deref()?
            .split_ascii_whitespace()
            .filter_map(parse_size_token)
            .max()
    }
}

/// Parses a `WxH` size token into its area.
fn parse_size_token(token: &str) -> Option<u64> {
    let (width, height) = token.split_once(['x', 'X'])?;
    let width: u64 = width.parse().ok()?;
    let height: u64 = height.parse().ok()?;
    width.checked_mul(height)
}
