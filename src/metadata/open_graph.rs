//! Projection of the Open Graph object type's own properties.

use indexmap::IndexMap;

use super::Metadata;
use crate::models::OneOrMany;

impl Metadata {
    /// Properties of the page's Open Graph object type, keyed without their prefix.
    ///
    /// The prefix is `og:type` cut at its first `.`: for `og:type = "video.movie"`
    /// every `video:*` meta key is returned (`video:duration` as `duration`).
    /// Keys seen once map to a bare value, repeated keys to an array. Empty when
    /// `og:type` is absent.
    ///
    /// ```
    /// use page_metadata::{extract, HtmlDocument, OneOrMany};
    /// use scraper::Html;
    ///
    /// let html = Html::parse_document(r#"
    ///     <meta property="og:type" content="article">
    ///     <meta property="article:author" content="Ada">
    ///     <meta property="article:tag" content="rust">
    ///     <meta property="article:tag" content="html">
    /// "#);
    /// let metadata = extract(&HtmlDocument::new(&html)).unwrap();
    /// let article = metadata.open_graph_object();
    /// assert_eq!(article["author"], OneOrMany::One("Ada".to_string()));
    /// assert_eq!(article["tag"].len(), 2);
    /// ```
    pub fn open_graph_object(&self) -> IndexMap<String, OneOrMany<String>> {
        let Some(og_type) = self.first_meta("og:type") else {
            return IndexMap::new();
        };

        let prefix = match og_type.split_once('.') {
            Some((head, _)) => head,
            None => og_type,
        };
        let prefix = format!("{prefix}:");

        self.meta
            .iter()
            .filter_map(|(key, values)| {
                let property = key.strip_prefix(prefix.as_str())?;
                let value = OneOrMany::collapse(values.clone())?;
                Some((property.to_string(), value))
            })
            .collect()
    }
}
