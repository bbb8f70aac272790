// src/application/deck_exporter.rs
use crate::domain::Card;
use anyhow::Result;
use tracing::info;

/// Destination for extracted cards
pub trait CardSink {
    /// Write all cards in order. Returns the number of cards written.
    fn write_cards(&mut self, cards: &[Card]) -> Result<usize>;
}

pub struct DeckExporter<S: CardSink> {
    sink: S,
}

impl<S: CardSink> DeckExporter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn export(&mut self, cards: &[Card]) -> Result<usize> {
        let count = self.sink.write_cards(cards)?;
        info!(count, "Exported cards");
        Ok(count)
    }

    /// Give up the exporter and return its sink for inspection
    pub fn into_sink(self) -> S {
        self.sink
    }
}
