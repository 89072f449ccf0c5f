use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not encode directory: {0}")]
    Json(#[from] serde_json::Error),

    /// The data file exists but does not hold a readable directory.
    /// Nothing is written back until the file is repaired or removed.
    #[error("Directory file {path} is corrupt: {reason}")]
    CorruptStore { path: PathBuf, reason: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    pub fn is_corrupt_store(&self) -> bool {
        matches!(self, AppError::CorruptStore { .. })
    }
}
