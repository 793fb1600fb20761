//! Error types for the CLI application.

use burns_domain::{ChecklistError, ScoreError};
use burns_store::StoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Responses could not be scored
    #[error("Invalid responses: {0}")]
    Score(#[from] ScoreError),

    /// Session store error
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Line editor error
    #[error("Input error: {0}")]
    Readline(String),

    /// Logging setup error
    #[error("Logging error: {0}")]
    Logging(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<ChecklistError<StoreError>> for CliError {
    fn from(err: ChecklistError<StoreError>) -> Self {
        match err {
            ChecklistError::Score(e) => CliError::Score(e),
            ChecklistError::Persistence(e) => CliError::Store(e),
        }
    }
}
