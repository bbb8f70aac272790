// src/ports/mod.rs
pub mod color_classes;
pub mod fence;
pub mod markup;
pub mod sanitizer;

pub use sanitizer::{CellSanitizer, SanitizeMode};
