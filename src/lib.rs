// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use application::{CardExtractor, DeckExporter};
use cli::args::{Args, Command};
use domain::Card;
use infrastructure::{read_html_file, Config, CsvFileSink, JsonCardWriter, NotionTable};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notion2anki with arguments");

    match args.command {
        Command::Convert { input, output } => {
            let config = Config::resolve(args.config.as_deref())?;
            let output = output.unwrap_or_else(|| default_output_path(&input));

            let count = convert_file(&input, &output, &config)?;
            println!("Wrote {} cards to {}", count, output.display());
        }
        Command::Preview { input } => {
            let config = Config::resolve(args.config.as_deref())?;
            let cards = extract_cards(&input, &config)?;

            let stdout = std::io::stdout();
            DeckExporter::new(JsonCardWriter::new(stdout.lock())).export(&cards)?;
        }
        Command::InitConfig { path } => {
            if path.exists() {
                bail!("Config file already exists: {}", path.display());
            }
            Config::create_default(&path)?;
            println!("Created config file at {}", path.display());
        }
    }

    Ok(())
}

/// Read an export and extract its cards without writing anything
pub fn extract_cards(input: &Path, config: &Config) -> Result<Vec<Card>> {
    info!(?input, "Reading Notion export");
    let html = read_html_file(input)?;

    let table = NotionTable::parse(&html)
        .with_context(|| format!("Failed to read table from {}", input.display()))?;
    let cards = CardExtractor::new(config.columns.clone())
        .extract(&table)
        .with_context(|| format!("Failed to extract cards from {}", input.display()))?;

    Ok(cards)
}

/// Convert one export into an Anki CSV file. All cards are extracted before
/// the output file is created, so structural errors leave no file behind.
pub fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<usize> {
    let cards = extract_cards(input, config)?;

    let mut exporter = DeckExporter::new(CsvFileSink::new(output));
    exporter.export(&cards)
}

/// `INPUT` with its extension replaced by `csv`
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("csv")
}
