//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use super::constants::STDIN_INPUT;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line configuration for the `page-metadata` binary.
///
/// # Examples
///
/// ```
/// use page_metadata::Config;
/// use std::path::{Path, PathBuf};
///
/// let config = Config {
///     input: PathBuf::from("page.html"),
///     pretty: true,
///     ..Default::default()
/// };
/// assert!(!config.reads_stdin());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "page-metadata",
    about = "Extract Open Graph, Twitter Card, favicon, feed, JSON-LD and microdata metadata from an HTML file"
)]
pub struct Config {
    /// HTML file to read (`-` reads from stdin)
    #[arg(default_value = STDIN_INPUT)]
    pub input: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print only the derived values (title, description, favicon, ...)
    #[arg(long)]
    pub summary_only: bool,
}

/// Returns `true` if `path` is the stdin marker (`-`).
pub fn is_stdin_path(path: &Path) -> bool {
    path.as_os_str() == STDIN_INPUT
}

impl Config {
    /// Returns `true` when the input should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        is_stdin_path(&self.input)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(STDIN_INPUT),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            pretty: false,
            summary_only: false,
        }
    }
}
