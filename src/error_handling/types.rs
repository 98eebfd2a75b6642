//! Error type definitions.
//!
//! This module defines the error types surfaced by the library and the binary.

use log::SetLoggerError;
use thiserror::Error;

/// Message used when `extract` is handed something that is not a queryable document.
pub const NOT_A_DOCUMENT_MESSAGE: &str = "Expected a DOM Document with querySelectorAll.";

/// Errors returned to callers of the library.
///
/// Only caller mistakes are reported here. Malformed page content (bad JSON-LD,
/// cyclic microdata, missing attributes) is never an error: it is skipped.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// A required argument was missing, empty, or of the wrong shape.
    #[error("{0}")]
    InvalidArgument(String),

    /// Serializing a snapshot to JSON failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MetadataError {
    /// Shorthand for building an `InvalidArgument` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        MetadataError::InvalidArgument(message.into())
    }

    /// Returns `true` for caller errors (as opposed to serialization failures).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MetadataError::InvalidArgument(_))
    }
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}
