//! Microdata extraction following the WHATWG microdata-to-JSON algorithm.
//!
//! Each item gathers its property elements with a breadth-first crawl over its
//! children and `itemref` targets, sorted back into document order. Nested
//! items recurse with the set of their ancestor items; an item that is already
//! one of its own ancestors yields nothing and is left out of its parent, as
//! does an item nested more than `MAX_MICRODATA_DEPTH` items deep.

use std::collections::{HashSet, VecDeque};

use indexmap::IndexMap;
use log::{debug, trace};

use crate::config::{
    DATA_ELEMENTS, HREF_ELEMENTS, MAX_MICRODATA_DEPTH, MICRODATA_ITEM_SELECTOR_STR, SRC_ELEMENTS,
    VALUE_ELEMENTS,
};
use crate::dom::Document;
use crate::metadata::Metadata;
use crate::models::{MicrodataItem, MicrodataValue, OneOrMany};
use crate::utils::{decode_html_entities, non_empty, split_tokens};

/// Extracts every top-level item (`itemscope` without `itemprop`).
pub(crate) fn extract_microdata<D: Document>(document: &D, metadata: &mut Metadata) {
    let ancestors = HashSet::new();
    for element in document.query_selector_all(MICRODATA_ITEM_SELECTOR_STR) {
        if let Some(item) = extract_item(document, element, &ancestors) {
            metadata.microdata.push(item);
        }
    }
}

/// Extracts the microdata item rooted at `element`.
///
/// Works for nested items too; `element` should carry `itemscope`.
///
/// ```
/// use page_metadata::{extract_microdata_item, Document, HtmlDocument};
/// use scraper::Html;
///
/// let html = Html::parse_document(r#"
///     <div itemscope itemtype="https://schema.org/Person">
///         <span itemprop="name">Ada Lovelace</span>
///     </div>
/// "#);
/// let document = HtmlDocument::new(&html);
/// let person = document.query_selector("[itemscope]").unwrap();
/// let item = extract_microdata_item(&document, person).unwrap();
/// assert_eq!(item.text("name"), Some("Ada Lovelace"));
/// ```
pub fn extract_microdata_item<D: Document>(
    document: &D,
    element: D::Node,
) -> Option<MicrodataItem> {
    extract_item(document, element, &HashSet::new())
}

/// `ancestors` holds the items currently being extracted above `element`.
/// It is copied, never shared, so sibling branches do not see each other.
fn extract_item<D: Document>(
    document: &D,
    element: D::Node,
    ancestors: &HashSet<D::Node>,
) -> Option<MicrodataItem> {
    if ancestors.contains(&element) {
        debug!("Microdata cycle detected at {element:?}; skipping nested item");
        return None;
    }
    if ancestors.len() >= MAX_MICRODATA_DEPTH {
        debug!("Microdata nested deeper than {MAX_MICRODATA_DEPTH} items at {element:?}; skipping");
        return None;
    }
    let mut ancestors = ancestors.clone();
    ancestors.insert(element);

    let item_type = document
        .attr(element, "itemtype")
        .map(|types| split_tokens(types).map(str::to_string).collect::<Vec<_>>())
        .filter(|types| !types.is_empty());
    let id = non_empty(document.attr(element, "itemid")).map(str::to_string);

    let mut collected: IndexMap<String, Vec<MicrodataValue>> = IndexMap::new();
    for property in property_elements(document, element) {
        let value = if document.has_attr(property, "itemscope") {
            match extract_item(document, property, &ancestors) {
                Some(item) => MicrodataValue::Item(item),
                None => continue,
            }
        } else {
            MicrodataValue::Text(property_value(document, property))
        };

        let names = document.attr(property, "itemprop").unwrap_or_default();
        for name in split_tokens(names) {
            collected
                .entry(name.to_string())
                .or_default()
                .push(value.clone());
        }
    }

    let properties = collected
        .into_iter()
        .filter_map(|(name, values)| OneOrMany::collapse(values).map(|value| (name, value)))
        .collect();

    Some(MicrodataItem {
        item_type,
        id,
        properties,
    })
}

/// The elements carrying `itemprop` that belong to `root`, in document order.
fn property_elements<D: Document>(document: &D, root: D::Node) -> Vec<D::Node> {
    let mut visited = HashSet::from([root]);
    let mut pending: VecDeque<D::Node> = document.children(root).into();

    if let Some(refs) = document.attr(root, "itemref") {
        for id in split_tokens(refs) {
            match document.get_element_by_id(id) {
                Some(target) => pending.push_back(target),
                None => trace!("itemref target #{id} not found"),
            }
        }
    }

    let mut results = Vec::new();
    while let Some(current) = pending.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        // Nested items own their subtree
        if !document.has_attr(current, "itemscope") {
            pending.extend(document.children(current));
        }
        let has_names = document
            .attr(current, "itemprop")
            .is_some_and(|names| split_tokens(names).next().is_some());
        if has_names {
            results.push(current);
        }
    }

    results.sort_by(|a, b| document.compare_document_position(*a, *b));
    results
}

/// The text value of a non-item property element, chosen by element name.
fn property_value<D: Document>(document: &D, element: D::Node) -> String {
    let attr = |name: &str| document.attr(element, name).unwrap_or_default().to_string();
    let tag = document.tag_name(element).to_ascii_lowercase();

    match tag.as_str() {
        "meta" => decode_html_entities(document.attr(element, "content").unwrap_or_default()),
        tag if HREF_ELEMENTS.contains(&tag) => attr("href"),
        tag if SRC_ELEMENTS.contains(&tag) => attr("src"),
        tag if DATA_ELEMENTS.contains(&tag) => attr("data"),
        tag if VALUE_ELEMENTS.contains(&tag) => attr("value"),
        "time" => match document.attr(element, "datetime") {
            Some(datetime) => datetime.to_string(),
            None => document.text_content(element),
        },
        _ => document.text_content(element),
    }
}
