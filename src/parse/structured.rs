//! JSON-LD extraction.
//!
//! Each `<script type="application/ld+json">` body is parsed as strict JSON. A
//! top-level array contributes its elements individually (one level only); a
//! block that fails to parse contributes nothing.

use log::debug;
use serde_json::Value;

use crate::config::JSON_LD_SELECTOR_STR;
use crate::dom::Document;
use crate::metadata::Metadata;

pub(crate) fn extract_json_ld<D: Document>(document: &D, metadata: &mut Metadata) {
    for (index, script) in document
        .query_selector_all(JSON_LD_SELECTOR_STR)
        .into_iter()
        .enumerate()
    {
        let body = document.text_content(script);
        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Array(values)) => metadata.jsonld.extend(values),
            Ok(value) => metadata.jsonld.push(value),
            Err(e) => debug!("Skipping malformed JSON-LD block #{index}: {e}"),
        }
    }
}
