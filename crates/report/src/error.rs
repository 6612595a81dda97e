use std::path::PathBuf;

use rust_xlsxwriter::XlsxError;
use thiserror::Error;
use wafreport_cases::CasesError;
use wafreport_sheet::SheetError;

/// Errors that can occur while building the report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Missing architecture doc: {}", .0.display())]
    MissingArchitectureDoc(PathBuf),

    #[error("Missing support cases CSV: {}", .0.display())]
    MissingSupportCases(PathBuf),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Support cases error: {0}")]
    Cases(#[from] CasesError),

    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),

    #[error("xlsx write error: {0}")]
    Xlsx(#[from] XlsxError),
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
