/// Core error types for Tilawa
use thiserror::Error;

/// Result type alias using `TilawaError`
pub type Result<T> = std::result::Result<T, TilawaError>;

/// Core error type for Tilawa
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TilawaError {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TilawaError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
