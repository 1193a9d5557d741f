//! Error types for linq-stream
//!
//! Values flowing through a transport are never wrapped in errors; these types
//! only describe failures of the plumbing around them.

use thiserror::Error;

/// Main error type for linq-stream operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// The receiving side of a transport was dropped or closed
    #[error("transport disconnected: receiver is gone")]
    Disconnected,
    /// A bounded wait elapsed before the stage finished
    #[error("operation timed out")]
    Timeout,
    /// A stage task panicked or was aborted
    #[error("stage failed: {0}")]
    StageFailed(String),
    /// A configuration value was rejected
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A configuration document could not be parsed
    #[error("configuration parse error: {0}")]
    Config(String),
}

impl From<tokio::time::error::Elapsed> for SeqError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        SeqError::Timeout
    }
}

impl From<tokio::task::JoinError> for SeqError {
    fn from(err: tokio::task::JoinError) -> Self {
        SeqError::StageFailed(err.to_string())
    }
}

impl From<serde_json::Error> for SeqError {
    fn from(err: serde_json::Error) -> Self {
        SeqError::Config(err.to_string())
    }
}

/// Result type for linq-stream operations
pub type SeqResult<T> = Result<T, SeqError>;
