//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_metadata` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading HTML from a file or stdin
//! - Printing the extracted metadata as JSON
//!
//! All extraction logic is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;

use page_metadata::app::read_html;
use page_metadata::initialization::init_logger_with;
use page_metadata::{extract_html, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let html = read_html(&config.input)?;
    let metadata = extract_html(&html).context("Failed to extract metadata")?;

    let json = if config.summary_only {
        metadata.summary().to_json(config.pretty)
    } else {
        metadata.to_report_json(config.pretty)
    }
    .context("Failed to serialize metadata")?;

    println!("{json}");
    Ok(())
}
