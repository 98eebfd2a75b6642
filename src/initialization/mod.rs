//! Process-level initialization for the `page-metadata` binary.
//!
//! The library itself only emits `log` records; installing a logger is left to
//! the embedding application, which may use `init_logger_with`.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
