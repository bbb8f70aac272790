// src/domain/card.rs
use crate::domain::TagList;
use serde::Serialize;

/// One flashcard row of the Anki import file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Card {
    #[serde(rename = "Notion-ID")]
    pub notion_id: String,
    /// Plain text question
    #[serde(rename = "Front")]
    pub front: String,
    /// Sanitized HTML answer
    #[serde(rename = "Back")]
    pub back: String,
    #[serde(rename = "Tags")]
    pub tags: TagList,
}
