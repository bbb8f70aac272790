// src/infrastructure/mod.rs
pub mod config;
pub mod csv_writer;
pub mod html_reader;
pub mod json_writer;
pub mod notion_table;

pub use config::Config;
pub use csv_writer::{CsvCardWriter, CsvFileSink};
pub use html_reader::read_html_file;
pub use json_writer::JsonCardWriter;
pub use notion_table::{NotionTable, TableRow};
