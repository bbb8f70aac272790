// src/infrastructure/html_reader.rs
use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

/// Read an exported HTML file.
///
/// Invalid UTF-8 sequences are replaced instead of failing the run.
pub fn read_html_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read HTML file {}", path.display()))?;

    match String::from_utf8(bytes) {
        Ok(html) => Ok(html),
        Err(err) => {
            warn!(?path, "Input is not valid UTF-8, replacing invalid sequences");
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}
