// src/domain/mod.rs
pub mod card;
pub mod color;
pub mod column;
pub mod error;
pub mod tags;

pub use card::Card;
pub use color::{ColorClass, ColorKey};
pub use column::{CardColumns, ColumnMap, Field, HeaderRules};
pub use error::DomainError;
pub use tags::TagList;
