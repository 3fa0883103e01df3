//! Error types for the datecast simulator

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for datecast operations
pub type Result<T> = std::result::Result<T, DatecastError>;

/// Main error type for the simulator
#[derive(Error, Debug)]
pub enum DatecastError {
    #[error("Missing {kind} artifact at {path}: place the trained model and baseline files next to the binary")]
    ArtifactMissing { kind: &'static str, path: PathBuf },

    #[error("Invalid {kind} artifact: {reason}")]
    InvalidArtifact { kind: &'static str, reason: String },

    #[error("Schema mismatch: model expects columns {expected}, baseline provides {actual}")]
    SchemaMismatch { expected: String, actual: String },

    #[error("Feature not found: {0}")]
    FeatureNotFound(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<polars::error::PolarsError> for DatecastError {
    fn from(err: polars::error::PolarsError) -> Self {
        DatecastError::DataError(err.to_string())
    }
}

impl From<serde_json::Error> for DatecastError {
    fn from(err: serde_json::Error) -> Self {
        DatecastError::SerializationError(err.to_string())
    }
}
