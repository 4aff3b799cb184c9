use thiserror::Error;

#[derive(Debug, Error)]
pub enum LatexError {
    #[error("Please enter a file name")]
    InvalidFileName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sheet error: {0}")]
    Sheet(#[from] confuser_sheet::SheetError),
}

pub type Result<T> = std::result::Result<T, LatexError>;
