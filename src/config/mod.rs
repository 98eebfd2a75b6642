//! Configuration and constants.
//!
//! This module provides:
//! - Extraction vocabularies (selectors, link relations, MIME allow-lists)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{is_stdin_path, Config, LogFormat, LogLevel};
