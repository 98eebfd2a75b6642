//! DOM capability interface.
//!
//! The extraction pass never touches a concrete HTML parser. It reads the page
//! through the `Document` trait, which models the handful of DOM operations the
//! pass needs: selector queries, id lookup, attribute reads, child iteration,
//! text content, and document-order comparison.
//!
//! `HtmlDocument` implements the trait over `scraper::Html`.

mod html_document;

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

pub use html_document::{ElementId, HtmlDocument};

/// Read-only access to a parsed document tree.
///
/// Elements are addressed by `Node` handles. Two handles are equal exactly when
/// they refer to the same element, so handles can key identity sets (the
/// microdata cycle guard relies on this).
pub trait Document {
    /// Opaque, cheap-to-copy element handle.
    type Node: Copy + Eq + Hash + Debug;

    /// The root element of the document, or `None` if this is not a queryable document.
    fn document_element(&self) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Node>;

    /// The first element matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<Self::Node> {
        self.query_selector_all(selector).into_iter().next()
    }

    /// The first element in document order whose `id` attribute equals `id`.
    fn get_element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Lowercase local name of the element (`"meta"`, `"img"`, ...).
    fn tag_name(&self, node: Self::Node) -> &str;

    /// Raw attribute value, if present.
    fn attr(&self, node: Self::Node, name: &str) -> Option<&str>;

    fn has_attr(&self, node: Self::Node, name: &str) -> bool {
        self.attr(node, name).is_some()
    }

    /// Element children, in document order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Concatenated text of all descendant text nodes.
    fn text_content(&self, node: Self::Node) -> String;

    /// Orders two elements by their position in the document.
    fn compare_document_position(&self, a: Self::Node, b: Self::Node) -> Ordering;
}
