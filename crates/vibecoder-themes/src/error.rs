//! Error types for the themes module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Theme not found: {0}")]
    NotFound(String),

    #[error("Invalid theme format: {0}")]
    InvalidFormat(String),

    #[error("Registry validation failed: {0}")]
    ValidationError(String),

    #[error("Duplicate theme key: {0}")]
    DuplicateKey(String),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
