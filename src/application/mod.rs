// src/application/mod.rs
pub mod card_extractor;
pub mod deck_exporter;

pub use card_extractor::CardExtractor;
pub use deck_exporter::{CardSink, DeckExporter};
