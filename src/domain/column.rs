// src/domain/column.rs
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Logical card field a table column can be mapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Front,
    Back,
    Tags,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Id => "id",
            Field::Front => "front",
            Field::Back => "back",
            Field::Tags => "tags",
        };
        f.write_str(name)
    }
}

/// Header keywords used to recognise each column.
///
/// `id` and `tags` match when the header *contains* the keyword,
/// `front` and `back` only on an exact match.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct HeaderRules {
    #[serde(default = "default_id")]
    pub id: String,
    #[serde(default = "default_front")]
    pub front: String,
    #[serde(default = "default_back")]
    pub back: String,
    #[serde(default = "default_tags")]
    pub tags: String,
}

fn default_id() -> String { "notion-id".to_string() }
fn default_front() -> String { "front".to_string() }
fn default_back() -> String { "back".to_string() }
fn default_tags() -> String { "tags".to_string() }

impl Default for HeaderRules {
    fn default() -> Self {
        Self {
            id: default_id(),
            front: default_front(),
            back: default_back(),
            tags: default_tags(),
        }
    }
}

impl HeaderRules {
    /// Classify one header. Rules are tried in the order id, front, back, tags
    /// and the first that matches wins for this header.
    pub fn classify(&self, header: &str) -> Option<Field> {
        let name = header.trim().to_lowercase();

        if name.contains(&self.id.to_lowercase()) {
            Some(Field::Id)
        } else if name == self.front.to_lowercase() {
            Some(Field::Front)
        } else if name == self.back.to_lowercase() {
            Some(Field::Back)
        } else if name.contains(&self.tags.to_lowercase()) {
            Some(Field::Tags)
        } else {
            None
        }
    }
}

/// Positional index of each logical field in the header row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap {
    pub id: Option<usize>,
    pub front: Option<usize>,
    pub back: Option<usize>,
    pub tags: Option<usize>,
}

/// Column map with the mandatory fields resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardColumns {
    pub id: Option<usize>,
    pub front: usize,
    pub back: usize,
    pub tags: Option<usize>,
}

impl ColumnMap {
    pub fn resolve<S: AsRef<str>>(headers: &[S], rules: &HeaderRules) -> Self {
        let mut map = ColumnMap::default();

        for (idx, header) in headers.iter().enumerate() {
            let Some(field) = rules.classify(header.as_ref()) else {
                continue;
            };

            let slot = map.slot_mut(field);
            if let Some(existing) = *slot {
                warn!(
                    %field,
                    kept = existing,
                    ignored = idx,
                    "Multiple headers match the same column, keeping the first"
                );
            } else {
                *slot = Some(idx);
            }
        }

        debug!(?map, "Resolved column map");
        map
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<usize> {
        match field {
            Field::Id => &mut self.id,
            Field::Front => &mut self.front,
            Field::Back => &mut self.back,
            Field::Tags => &mut self.tags,
        }
    }

    /// Require the front and back columns; id and tags stay optional
    pub fn require_card_fields(&self) -> Result<CardColumns, DomainError> {
        let front = self.front.ok_or(DomainError::ColumnMissing(Field::Front))?;
        let back = self.back.ok_or(DomainError::ColumnMissing(Field::Back))?;

        Ok(CardColumns {
            id: self.id,
            front,
            back,
            tags: self.tags,
        })
    }
}
