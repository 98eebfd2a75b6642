//! Reading HTML input for the binary.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::{is_stdin_path, MAX_HTML_INPUT_SIZE};

/// Reads at most `MAX_HTML_INPUT_SIZE` bytes from `reader`, decoding lossily as UTF-8.
fn read_limited<R: Read>(reader: R, source: &str) -> Result<String> {
    let mut buf = Vec::new();
    reader
        .take(MAX_HTML_INPUT_SIZE as u64 + 1)
        .read_to_end(&mut buf)
        .with_context(|| format!("Failed to read HTML from {source}"))?;

    if buf.len() > MAX_HTML_INPUT_SIZE {
        bail!(
            "HTML input from {} exceeds the {}MB limit",
            source,
            MAX_HTML_INPUT_SIZE / (1024 * 1024)
        );
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Reads an HTML document from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if the input is
/// larger than `MAX_HTML_INPUT_SIZE`.
pub fn read_html(path: &Path) -> Result<String> {
    if is_stdin_path(path) {
        log::debug!("Reading HTML from stdin");
        return read_limited(io::stdin().lock(), "stdin");
    }

    let source = path.display().to_string();
    log::debug!("Reading HTML from {source}");
    let file = File::open(path).with_context(|| format!("Failed to open {source}"))?;
    read_limited(file, &source)
}
