//! Error types for catalog ingestion.

use std::path::PathBuf;

use creg_model::ModelError;
use thiserror::Error;

/// Errors that can occur while loading a course catalog.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Catalog file not found.
    #[error("catalog file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Catalog document is not valid JSON or does not match the expected shape.
    #[error("failed to parse catalog {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === Catalog Checks ===
    /// Student credit limits are inverted.
    #[error("invalid credit band in {path}: minimum {min} is greater than maximum {max}")]
    InvalidCreditBand { path: PathBuf, min: u32, max: u32 },

    /// Two courses share a code.
    #[error("duplicate course code '{code}' in {path}")]
    DuplicateCourse { path: PathBuf, code: String },
}

impl IngestError {
    pub(crate) fn from_model(path: PathBuf, err: ModelError) -> Self {
        match err {
            ModelError::InvalidBand { min, max } => Self::InvalidCreditBand { path, min, max },
            ModelError::DuplicateCourse { code } => Self::DuplicateCourse { path, code },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
