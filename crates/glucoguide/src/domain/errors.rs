//! Domain Errors
//!
//! Error types for catalog and conversation operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn unknown_category<T: AsRef<str>>(key: T) -> Self {
        Self::UnknownCategory(key.as_ref().to_string())
    }

    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }
}
