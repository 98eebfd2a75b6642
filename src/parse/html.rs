//! Document title and first heading, used as title fallbacks.

use log::debug;

use crate::config::{FIRST_HEADING_SELECTOR_STR, TITLE_SELECTOR_STR};
use crate::dom::Document;
use crate::metadata::Metadata;

/// Trimmed text of the first element matching `selector`; `None` if it is blank.
fn first_text<D: Document>(document: &D, selector: &str) -> Option<String> {
    let element = document.query_selector(selector)?;
    let text = document.text_content(element);
    let text = text.trim();
    if text.is_empty() {
        debug!("First <{selector}> element has no text");
        return None;
    }
    Some(text.to_string())
}

/// Records the first `<title>` and `<h1>` texts.
pub(crate) fn extract_document_titles<D: Document>(document: &D, metadata: &mut Metadata) {
    metadata.title_text = first_text(document, TITLE_SELECTOR_STR);
    metadata.first_heading_text = first_text(document, FIRST_HEADING_SELECTOR_STR);
}
