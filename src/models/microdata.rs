//! Microdata items in the WHATWG microdata-to-JSON shape.

use indexmap::IndexMap;
use serde::Serialize;

use super::OneOrMany;

/// A value of a microdata property: text or a nested item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MicrodataValue {
    Text(String),
    Item(MicrodataItem),
}

impl MicrodataValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MicrodataValue::Text(text) => Some(text),
            MicrodataValue::Item(_) => None,
        }
    }

    pub fn as_item(&self) -> Option<&MicrodataItem> {
        match self {
            MicrodataValue::Item(item) => Some(item),
            MicrodataValue::Text(_) => None,
        }
    }
}

/// A microdata item (`itemscope`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MicrodataItem {
    /// `itemtype` tokens.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<Vec<String>>,
    /// Trimmed `itemid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Properties in first-seen order; single values are not wrapped in an array.
    pub properties: IndexMap<String, OneOrMany<MicrodataValue>>,
}

impl MicrodataItem {
    /// Looks up a property by name.
    pub fn property(&self, name: &str) -> Option<&OneOrMany<MicrodataValue>> {
        self.properties.get(name)
    }

    /// The first text value of a property, if any.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.property(name)?
            .as_slice()
            .iter()
            .find_map(MicrodataValue::as_text)
    }

    /// Returns `true` if `itemtype` lists `type_url`.
    pub fn has_type(&self, type_url: &str) -> bool {
        self.item_type
            .as_ref()
            .is_some_and(|types| types.iter().any(|t| t == type_url))
    }
}
