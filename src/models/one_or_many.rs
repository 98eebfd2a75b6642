//! Single-value collapsing for multi-valued properties.

use serde::Serialize;

/// A property value that collapses to the bare value when only one was collected.
///
/// Used for microdata properties and the Open Graph object projection. Serializes
/// as either the value itself or a JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Collapses a list of collected values. Returns `None` for an empty list.
    pub fn collapse(mut values: Vec<T>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => values.pop().map(OneOrMany::One),
            _ => Some(OneOrMany::Many(values)),
        }
    }

    /// Returns the single value, if this property was not multi-valued.
    pub fn as_one(&self) -> Option<&T> {
        match self {
            OneOrMany::One(value) => Some(value),
            OneOrMany::Many(_) => None,
        }
    }

    /// Returns the values as a slice regardless of multiplicity.
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}
