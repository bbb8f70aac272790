// src/infrastructure/notion_table.rs
use crate::domain::DomainError;
use crate::util::text::visible_text;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

lazy_static! {
    static ref TABLE_SELECTOR: Selector =
        Selector::parse("table").expect("Failed to compile table selector");
    static ref HEADER_CELL_SELECTOR: Selector =
        Selector::parse("th").expect("Failed to compile header cell selector");
}

/// Parsed Notion database export. Only the first `<table>` is used.
pub struct NotionTable {
    document: Html,
}

/// Data cells of one body row, in column order
#[derive(Debug)]
pub struct TableRow<'a> {
    cells: Vec<ElementRef<'a>>,
}

impl<'a> TableRow<'a> {
    pub fn cell(&self, idx: usize) -> Option<ElementRef<'a>> {
        self.cells.get(idx).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl NotionTable {
    /// Parse an HTML document. Malformed markup is tolerated; only a missing
    /// table is an error.
    pub fn parse(html: &str) -> Result<Self, DomainError> {
        let document = Html::parse_document(html);
        if document.select(&TABLE_SELECTOR).next().is_none() {
            return Err(DomainError::TableNotFound);
        }
        debug!(bytes = html.len(), "Parsed HTML document");
        Ok(Self { document })
    }

    fn table(&self) -> Result<ElementRef<'_>, DomainError> {
        self.document
            .select(&TABLE_SELECTOR)
            .next()
            .ok_or(DomainError::TableNotFound)
    }

    /// Visible text of each `th` in the table's `<thead>`
    pub fn headers(&self) -> Result<Vec<String>, DomainError> {
        let table = self.table()?;
        let thead = child_elements(table, "thead")
            .next()
            .ok_or(DomainError::HeaderNotFound)?;

        let headers: Vec<String> = thead
            .select(&HEADER_CELL_SELECTOR)
            .map(|th| visible_text(th, ""))
            .collect();

        debug!(?headers, "Read table headers");
        Ok(headers)
    }

    /// Body rows in document order. Rows without any `td` are skipped.
    pub fn rows(&self) -> Result<Vec<TableRow<'_>>, DomainError> {
        let table = self.table()?;
        let mut rows = Vec::new();

        for tbody in child_elements(table, "tbody") {
            for tr in child_elements(tbody, "tr") {
                let cells: Vec<ElementRef<'_>> = child_elements(tr, "td").collect();
                if cells.is_empty() {
                    trace!("Skipping row without data cells");
                    continue;
                }
                rows.push(TableRow { cells });
            }
        }

        debug!(count = rows.len(), "Read table rows");
        Ok(rows)
    }
}

/// Direct element children with the given tag name. Tables nested inside a
/// cell are not descended into.
fn child_elements<'a>(
    parent: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |element| element.value().name() == name)
}
