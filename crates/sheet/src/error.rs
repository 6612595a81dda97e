use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Errors that can occur while laying out a worksheet
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Row index overflow: {0}")]
    RowOverflow(usize),

    #[error("Column index overflow: {0}")]
    ColOverflow(usize),

    #[error("Invalid table name: {name:?}")]
    InvalidTableName { name: String },

    #[error("Table {name} has no header columns")]
    EmptyHeaders { name: String },

    #[error("Row {row} of table {name} has {actual} cells, expected {expected}")]
    RowWidthMismatch {
        name: String,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("xlsx write error: {0}")]
    Xlsx(#[from] XlsxError),
}

pub type Result<T> = std::result::Result<T, SheetError>;
