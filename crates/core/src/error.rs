//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// These are the *hard* failures: the operation that raised one did not take
/// effect. Rejected price writes are not errors (see `Price` and the product
/// setters), they leave the previous value in place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. zero quantity, malformed field mapping).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An operand or item had the wrong concrete type for the operation.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_message() {
        let err = DomainError::validation("quantity cannot be zero");
        assert_eq!(err.to_string(), "validation failed: quantity cannot be zero");

        let err = DomainError::type_mismatch("Smartphone + LawnGrass");
        assert_eq!(err.to_string(), "type mismatch: Smartphone + LawnGrass");
    }

    #[test]
    fn kind_predicates() {
        assert!(DomainError::validation("x").is_validation());
        assert!(!DomainError::validation("x").is_type_mismatch());
        assert!(DomainError::type_mismatch("x").is_type_mismatch());
    }
}
