use thiserror::Error;

/// Errors that can occur while loading support cases
#[derive(Error, Debug)]
pub enum CasesError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CasesError>;
