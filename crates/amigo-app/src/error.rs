//! Error types for the amigo-app service layer.

use std::path::PathBuf;

use amigo_tuning::TuningError;

use crate::validate::ValidationError;

/// Application error type shared by every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read batch file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write batch file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported batch file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Batch validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Tuning failed: {0}")]
    Tuning(#[from] TuningError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for amigo-app operations.
pub type AppResult<T> = Result<T, AppError>;
