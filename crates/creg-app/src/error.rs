//! Application error types.

use std::path::PathBuf;

use creg_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Failed to read the settings file.
    #[error("failed to read settings {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML or has invalid values.
    #[error("invalid settings {path}: {reason}")]
    Settings { path: PathBuf, reason: String },

    /// Effective credit band is inverted.
    #[error(transparent)]
    Band(#[from] ModelError),

    // =========================================================================
    // SUBMISSION
    // =========================================================================
    /// The submission sink failed to accept the payload.
    #[error("submission failed: {reason}")]
    Submission { reason: String },
}

impl AppError {
    pub fn submission(reason: impl Into<String>) -> Self {
        Self::Submission {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
