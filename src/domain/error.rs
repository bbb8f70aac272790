// src/domain/error.rs
use crate::domain::column::Field;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("No <table> element found in document")]
    TableNotFound,
    #[error("Table has no <thead> header section")]
    HeaderNotFound,
    #[error("Required column not found in table header: {0}")]
    ColumnMissing(Field),
}
