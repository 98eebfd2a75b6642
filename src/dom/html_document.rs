//! `Document` binding over `scraper::Html`.

use std::cmp::Ordering;
use std::collections::HashMap;

use scraper::{ElementRef, Html};

use super::Document;
use crate::utils::parse_selector_with_fallback;

/// Handle to an element of an `HtmlDocument`.
///
/// The wrapped value is the element's pre-order position, so handle order is
/// document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(usize);

/// A `scraper::Html` tree indexed for the `Document` trait.
///
/// Indexing walks the tree once, recording every element in document order along
/// with its element children and the first element carrying each `id`.
///
/// # Examples
///
/// ```
/// use page_metadata::{Document, HtmlDocument};
/// use scraper::Html;
///
/// let html = Html::parse_document(r#"<p id="intro">Hello</p>"#);
/// let document = HtmlDocument::new(&html);
/// let intro = document.get_element_by_id("intro").unwrap();
/// assert_eq!(document.tag_name(intro), "p");
/// assert_eq!(document.text_content(intro), "Hello");
/// ```
pub struct HtmlDocument<'a> {
    elements: Vec<ElementRef<'a>>,
    children: Vec<Vec<ElementId>>,
    ids: HashMap<&'a str, ElementId>,
}

impl<'a> HtmlDocument<'a> {
    /// Indexes a parsed document or fragment.
    pub fn new(html: &'a Html) -> Self {
        let mut elements = Vec::new();
        let mut children: Vec<Vec<ElementId>> = Vec::new();
        let mut ids = HashMap::new();

        // Explicit stack: deeply nested markup must not overflow the call stack
        let mut stack: Vec<(ElementRef<'a>, Option<usize>)> = vec![(html.root_element(), None)];
        while let Some((element, parent)) = stack.pop() {
            let index = elements.len();
            elements.push(element);
            children.push(Vec::new());
            if let Some(parent) = parent {
                children[parent].push(ElementId(index));
            }
            if let Some(id) = element.value().id() {
                ids.entry(id).or_insert(ElementId(index));
            }

            let child_elements: Vec<ElementRef<'a>> =
                element.children().filter_map(ElementRef::wrap).collect();
            for child in child_elements.into_iter().rev() {
                stack.push((child, Some(index)));
            }
        }

        log::trace!("Indexed {} elements ({} ids)", elements.len(), ids.len());

        Self {
            elements,
            children,
            ids,
        }
    }

    /// Number of elements in the document.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn element(&self, node: ElementId) -> Option<&ElementRef<'a>> {
        self.elements.get(node.0)
    }
}

impl Document for HtmlDocument<'_> {
    type Node = ElementId;

    fn document_element(&self) -> Option<ElementId> {
        (!self.elements.is_empty()).then_some(ElementId(0))
    }

    fn query_selector_all(&self, selector: &str) -> Vec<ElementId> {
        let Some(selector) = parse_selector_with_fallback(selector, "query_selector_all") else {
            return Vec::new();
        };
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| selector.matches(element))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    fn query_selector(&self, selector: &str) -> Option<ElementId> {
        let selector = parse_selector_with_fallback(selector, "query_selector")?;
        self.elements
            .iter()
            .position(|element| selector.matches(element))
            .map(ElementId)
    }

    fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        self.ids.get(id).copied()
    }

    fn tag_name(&self, node: ElementId) -> &str {
        self.element(node)
            .map(|element| element.value().name())
            .unwrap_or("")
    }

    fn attr(&self, node: ElementId, name: &str) -> Option<&str> {
        self.element(node).and_then(|element| element.value().attr(name))
    }

    fn children(&self, node: ElementId) -> Vec<ElementId> {
        self.children.get(node.0).cloned().unwrap_or_default()
    }

    fn text_content(&self, node: ElementId) -> String {
        self.element(node)
            .map(|element| element.text().collect())
            .unwrap_or_default()
    }

    fn compare_document_position(&self, a: ElementId, b: ElementId) -> Ordering {
        a.cmp(&b)
    }
}
