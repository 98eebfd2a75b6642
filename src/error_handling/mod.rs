//! Error handling.
//!
//! Errors are split into two tiers:
//! - **Caller errors** (`MetadataError::InvalidArgument`): a non-document passed
//!   to `extract`, or an empty required field passed to a record constructor.
//! - **Content anomalies**: malformed JSON-LD, microdata cycles, missing optional
//!   attributes. These never surface as errors; the offending item is skipped.

mod types;

// Re-export public API
pub use types::{InitializationError, MetadataError, NOT_A_DOCUMENT_MESSAGE};
