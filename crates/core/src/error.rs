//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every entity operation fails with one of two kinds: an argument that was
/// supposed to be text wasn't, or a value broke a positivity check or a
/// bounded-resource invariant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A textual argument was not text.
    #[error("type mismatch: {0}")]
    Type(String),

    /// A numeric argument was out of range, or the operation would push a
    /// bounded resource outside `[0, capacity]`.
    #[error("invalid value: {0}")]
    Value(String),
}

impl DomainError {
    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::Type(msg.into())
    }

    pub fn value(msg: impl Into<String>) -> Self {
        Self::Value(msg.into())
    }

    pub fn is_type(&self) -> bool {
        matches!(self, Self::Type(_))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Human-readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Type(msg) | Self::Value(msg) => msg,
        }
    }
}
