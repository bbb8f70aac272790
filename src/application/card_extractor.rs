// src/application/card_extractor.rs
use crate::domain::{Card, CardColumns, ColumnMap, DomainError, HeaderRules, TagList};
use crate::infrastructure::notion_table::{NotionTable, TableRow};
use crate::ports::{CellSanitizer, SanitizeMode};
use crate::util::text::visible_text;
use tracing::{debug, warn};

/// Use case: turn the rows of a Notion table export into cards
pub struct CardExtractor {
    rules: HeaderRules,
    sanitizer: CellSanitizer,
}

impl CardExtractor {
    pub fn new(rules: HeaderRules) -> Self {
        Self {
            rules,
            sanitizer: CellSanitizer::new(),
        }
    }

    /// Extract one card per body row, in document order.
    ///
    /// Fails before touching any row when the front or back column cannot be
    /// found in the header.
    pub fn extract(&self, table: &NotionTable) -> Result<Vec<Card>, DomainError> {
        let headers = table.headers()?;
        let columns = ColumnMap::resolve(&headers, &self.rules).require_card_fields()?;
        debug!(?columns, "Using columns");

        let cards: Vec<Card> = table
            .rows()?
            .iter()
            .enumerate()
            .map(|(idx, row)| self.card_from_row(idx, row, &columns))
            .collect();

        debug!(count = cards.len(), "Extracted cards");
        Ok(cards)
    }

    fn card_from_row(&self, idx: usize, row: &TableRow<'_>, columns: &CardColumns) -> Card {
        let needed = [Some(columns.front), Some(columns.back), columns.id, columns.tags]
            .into_iter()
            .flatten()
            .max()
            .unwrap_or_default();
        if row.len() <= needed {
            warn!(
                row = idx,
                cells = row.len(),
                "Row has fewer cells than the header, missing fields stay empty"
            );
        }

        let notion_id = columns
            .id
            .and_then(|col| row.cell(col))
            .map(|cell| visible_text(cell, ""))
            .unwrap_or_default();

        let front = row
            .cell(columns.front)
            .map(|cell| self.sanitizer.sanitize(cell, SanitizeMode::StripAll))
            .unwrap_or_default();

        let back = row
            .cell(columns.back)
            .map(|cell| self.sanitizer.sanitize(cell, SanitizeMode::Rich))
            .unwrap_or_default();

        let tags = columns
            .tags
            .and_then(|col| row.cell(col))
            .map(|cell| TagList::from_text(&visible_text(cell, " ")))
            .unwrap_or_default();

        Card {
            notion_id,
            front,
            back,
            tags,
        }
    }
}

impl Default for CardExtractor {
    fn default() -> Self {
        Self::new(HeaderRules::default())
    }
}
