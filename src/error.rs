//! Error definitions for record handling.
//!
//! None of these ever reach a logging caller: the pipeline reports them on
//! the diagnostic side channel and carries on.

use thiserror::Error;

/// Errors raised while building, gating or writing a record.
#[derive(Debug, Error)]
pub enum LogError {
    /// A severity name that is not one of debug, info or error.
    #[error("not a valid Level: {0:?}")]
    InvalidLevel(String),

    /// The record has no string `severity` field.
    #[error("severity level not set")]
    MissingSeverity,

    /// The record could not be encoded as JSON.
    #[error("encoding log record: {0}")]
    Encode(#[from] serde_json::Error),

    /// The sink rejected the write.
    #[error("writing log record: {0}")]
    Write(#[from] std::io::Error),
}

impl LogError {
    /// Short label for the failure, used as a metric label.
    pub fn kind(&self) -> &'static str {
        match self {
            LogError::InvalidLevel(_) => "invalid_level",
            LogError::MissingSeverity => "missing_severity",
            LogError::Encode(_) => "encode",
            LogError::Write(_) => "write",
        }
    }
}

/// Result type for record operations.
pub type LogResult<T> = Result<T, LogError>;
