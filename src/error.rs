//! Error types for the message board.

use thiserror::Error;

/// Common error type for board operations.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Database error.
    ///
    /// Wraps query and connection errors from sqlx.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Password hashing error.
    #[error(transparent)]
    Password(#[from] crate::password::PasswordError),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for BoardError {
    fn from(e: sqlx::Error) -> Self {
        BoardError::Database(e.to_string())
    }
}

/// Result type alias for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;
