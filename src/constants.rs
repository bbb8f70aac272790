// src/constants.rs
//
// Application-wide constants shared by the sanitizer, the CSV writer and the
// config loader.

/// Header row of the generated CSV file, in column order.
///
/// Used in: `infrastructure/csv_writer.rs`
pub const CSV_HEADER: [&str; 4] = ["Notion-ID", "Front", "Back", "Tags"];

/// Elements that survive rich-text sanitizing. Everything else is unwrapped
/// and replaced by its children.
///
/// `mark` is not listed because it is renamed to `span` before this check.
///
/// Used in: `ports/sanitizer.rs`
pub const ALLOWED_TAGS: &[&str] = &[
    "strong", "b", "em", "i", "u", "code", "pre", "span", "br", "ul", "ol", "li", "a", "div",
];

/// Inline style of the block that replaces a triple-backtick fence.
///
/// Used in: `ports/fence.rs`
pub const CODE_BLOCK_STYLE: &str =
    "font-family:Menlo,Consolas,'Courier New',monospace; white-space:pre";

/// Canonical serialized line break.
pub const LINE_BREAK: &str = "<br/>";

/// Directory below the platform config dir holding `config.toml`.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_DIR_NAME: &str = "notion2anki";

pub const CONFIG_FILE_NAME: &str = "config.toml";
