// src/infrastructure/json_writer.rs
use crate::application::CardSink;
use crate::domain::Card;
use anyhow::{Context, Result};
use std::io::Write;

/// Pretty-printed JSON array of cards, used by `preview`
pub struct JsonCardWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonCardWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Hand back the underlying writer, e.g. to inspect a `Vec<u8>` buffer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CardSink for JsonCardWriter<W> {
    fn write_cards(&mut self, cards: &[Card]) -> Result<usize> {
        serde_json::to_writer_pretty(&mut self.writer, cards)
            .context("Failed to serialize cards to JSON")?;
        writeln!(self.writer).context("Failed to write JSON output")?;
        self.writer.flush().context("Failed to flush JSON output")?;
        Ok(cards.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagList;
    use serde_json::Value;

    #[test]
    fn given_cards_when_writing_json_then_uses_csv_field_names() {
        // Arrange
        let cards = vec![Card {
            notion_id: "abc".to_string(),
            front: "What is a Tree?".to_string(),
            back: "<b>A graph</b>".to_string(),
            tags: TagList::from_text("cs, data structures"),
        }];
        let mut writer = JsonCardWriter::new(Vec::new());

        // Act
        let count = writer.write_cards(&cards).unwrap();

        // Assert
        assert_eq!(count, 1);
        let json: Value = serde_json::from_slice(&writer.into_inner()).unwrap();
        assert_eq!(json[0]["Notion-ID"], "abc");
        assert_eq!(json[0]["Front"], "What is a Tree?");
        assert_eq!(json[0]["Back"], "<b>A graph</b>");
        assert_eq!(json[0]["Tags"], "cs data-structures");
    }

    #[test]
    fn given_no_cards_when_writing_json_then_emits_empty_array() {
        let mut writer = JsonCardWriter::new(Vec::new());

        writer.write_cards(&[]).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output.trim(), "[]");
    }
}
