use thiserror::Error;

/// Errors that can occur while loading sheets or extracting grids
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Index out of bounds: row {row}, col {col} (sheet has {rows} rows, {cols} cols)")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid cell notation: {0}")]
    InvalidCellNotation(String),

    #[error("Sheet not found: {name}")]
    SheetNotFound { name: String },

    #[error("Sheet already exists: {name}")]
    SheetAlreadyExists { name: String },

    #[error("Grid is not rectangular: row {row} has {actual} cells, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("XLSX error: {0}")]
    Xlsx(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SheetError>;
