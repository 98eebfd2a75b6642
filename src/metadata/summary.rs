//! Derived values gathered into one serializable record.

use indexmap::IndexMap;
use serde::Serialize;

use super::Metadata;
use crate::error_handling::MetadataError;
use crate::models::OneOrMany;

/// The resolved view of a snapshot: every derived accessor evaluated once.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    pub favicon: String,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub open_graph_object: IndexMap<String, OneOrMany<String>>,
}

#[derive(Serialize)]
struct Report<'a> {
    summary: MetadataSummary,
    metadata: &'a Metadata,
}

impl Metadata {
    /// Evaluates every derived accessor.
    pub fn summary(&self) -> MetadataSummary {
        MetadataSummary {
            title: self.title().map(str::to_string),
            description: self.description().map(str::to_string),
            image: self.image().map(str::to_string),
            url: self.url().map(str::to_string),
            site_name: self.site_name().map(str::to_string),
            canonical_url: self.canonical_url().map(str::to_string),
            favicon: self.favicon().to_string(),
            open_graph_object: self.open_graph_object(),
        }
    }

    /// Serializes the snapshot together with its summary as
    /// `{"summary": {...}, "metadata": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::Json` if serialization fails.
    pub fn to_report_json(&self, pretty: bool) -> Result<String, MetadataError> {
        let report = Report {
            summary: self.summary(),
            metadata: self,
        };
        let json = if pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        Ok(json)
    }
}

impl MetadataSummary {
    /// Serializes the summary alone.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::Json` if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, MetadataError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
