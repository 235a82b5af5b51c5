use std::path::PathBuf;

use bookload_db::OperationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("File not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("Folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),
    #[error("No CSV files provided or found in folder.")]
    NoSources,
    #[error("Missing expected column '{column}'")]
    MissingColumn { column: String },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
}

impl ImportError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}
