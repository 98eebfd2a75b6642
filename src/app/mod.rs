//! Helpers for the `page-metadata` binary.

mod input;

// Re-export public API
pub use input::read_html;
