//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every rejected write leaves the targeted entity untouched; the error only
/// tells the caller why nothing happened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty name, title too short).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The field is write-once and already holds a value.
    #[error("immutable field: {0}")]
    Immutable(String),

    /// The referenced entity does not exist in the catalog.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn immutable(msg: impl Into<String>) -> Self {
        Self::Immutable(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Whether this error came from a rejected value rather than a missing
    /// or write-once target.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
