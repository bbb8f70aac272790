use anyhow::{Context, Result};
use notion2anki::infrastructure::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding a copy of an export fixture
#[allow(dead_code)]
pub struct TestExport {
    _temp_dir: TempDir,
    pub dir: PathBuf,
    pub input_path: PathBuf,
}

impl TestExport {
    /// Copy the bundled Notion export into a fresh temp directory
    pub fn from_fixture() -> Result<Self> {
        let html = std::fs::read_to_string(Self::fixture_path())
            .context("Failed to read export fixture")?;
        Self::with_html(&html)
    }

    /// Write arbitrary HTML as the export file
    pub fn with_html(html: &str) -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let dir = temp_dir.path().to_path_buf();
        let input_path = dir.join("Rust Flashcards 1f2e.html");

        std::fs::write(&input_path, html).context("Failed to write export file")?;

        Ok(Self {
            _temp_dir: temp_dir,
            dir,
            input_path,
        })
    }

    fn fixture_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/notion_export.html")
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.join("deck.csv")
    }

    /// Write a default config next to the export, so runs never pick up the
    /// user's own config file
    pub fn write_default_config(&self) -> Result<PathBuf> {
        let path = self.dir.join("notion2anki.toml");
        Config::create_default(&path).context("Failed to write default config")?;
        Ok(path)
    }
}

/// Build a minimal export table from header names and cell HTML
#[allow(dead_code)]
pub fn export_table(headers: &[&str], rows: &[&[&str]]) -> String {
    let header_html: String = headers.iter().map(|h| format!("<th>{h}</th>")).collect();
    let body_html: String = rows
        .iter()
        .map(|cells| {
            let cells: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    format!(
        "<html><body><table><thead><tr>{header_html}</tr></thead>\
         <tbody>{body_html}</tbody></table></body></html>"
    )
}

/// Parse a written CSV file into header + records
#[allow(dead_code)]
pub fn read_csv(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = csv::Reader::from_path(path).context("Failed to open CSV output")?;
    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        records.push(record?.iter().map(str::to_string).collect());
    }
    Ok((header, records))
}
