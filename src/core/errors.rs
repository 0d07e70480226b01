//! Shared error types for the funnel engine

use crate::core::FunnelStage;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for reliefgrid operations
#[derive(Debug, Error)]
pub enum Error {
    /// A record was submitted for a stage other than the controller's
    /// current stage
    #[error("Stage mismatch: funnel is at {current}, received a record for {submitted}")]
    StageMismatch {
        current: FunnelStage,
        submitted: FunnelStage,
    },

    /// The funnel run already reached impact reporting and was closed out
    #[error("Funnel run is complete; start a new run to process another case")]
    RunComplete,

    /// Case file errors
    #[error("Case file error: {message}")]
    CaseFile {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Wrapped external errors
    #[error(transparent)]
    External(#[from] anyhow::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a case file error with path context
    pub fn case_file(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::CaseFile {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
