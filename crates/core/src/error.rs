//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Construction of domain objects is the only fallible operation in this
/// crate; equality, hashing and ordering are total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity was constructed without an identifier.
    #[error("identifier must not be null (parameter: {parameter})")]
    NullIdentifier { parameter: &'static str },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn null_identifier(parameter: &'static str) -> Self {
        Self::NullIdentifier { parameter }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Name of the offending parameter, if this error refers to one.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::NullIdentifier { parameter } => Some(*parameter),
            Self::InvalidId(_) => None,
        }
    }
}
