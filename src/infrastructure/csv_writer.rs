// src/infrastructure/csv_writer.rs
use crate::application::CardSink;
use crate::constants::CSV_HEADER;
use crate::domain::Card;
use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info, instrument};

/// Writes cards as Anki-importable CSV to any byte sink.
///
/// Minimal quoting, CRLF record terminator, header row always present.
pub struct CsvCardWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvCardWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CardSink for CsvCardWriter<W> {
    fn write_cards(&mut self, cards: &[Card]) -> Result<usize> {
        // header written by hand so an empty deck still gets one
        let mut csv = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(&mut self.writer);

        csv.write_record(CSV_HEADER)
            .context("Failed to write CSV header")?;
        for card in cards {
            csv.serialize(card)
                .with_context(|| format!("Failed to write card {}", card.notion_id))?;
        }
        csv.flush().context("Failed to flush CSV output")?;

        Ok(cards.len())
    }
}

/// CSV sink bound to a file path.
///
/// Cards go to a temporary file next to the target which is renamed over it
/// once complete, so a failed run never leaves a truncated file behind.
/// The result has the permissions a plainly created file would get, or those
/// of the file it replaces. A symlinked target is written through.
#[derive(Debug)]
pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Replace a symlink by the file it points to
    fn target(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    fn create_temp(target: &Path) -> Result<NamedTempFile> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let temp = new_file_builder()
            .tempfile_in(&dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

        if let Ok(existing) = fs::metadata(target) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .with_context(|| format!("Failed to copy permissions of {}", target.display()))?;
        }

        Ok(temp)
    }
}

/// Temp files default to owner-only access; ask for the mode `fs::write`
/// would use so the umask applies as usual.
fn new_file_builder() -> Builder<'static, 'static> {
    #[allow(unused_mut)]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
}

impl CardSink for CsvFileSink {
    #[instrument(level = "debug", skip(cards), fields(count = cards.len()))]
    fn write_cards(&mut self, cards: &[Card]) -> Result<usize> {
        let target = self.target();
        let temp = Self::create_temp(&target)?;
        debug!(temp = ?temp.path(), "Writing cards to temporary file");

        let mut writer = CsvCardWriter::new(temp);
        let count = writer.write_cards(cards)?;

        writer
            .into_inner()
            .persist(&target)
            .with_context(|| format!("Failed to write CSV file {}", target.display()))?;

        info!(path = ?target, count, "Wrote CSV file");
        Ok(count)
    }
}
