//! Unified error types for the domain layer
//!
//! The rewrite core never propagates errors (every failed lookup is a silent
//! abort), so this type only covers parsing and validating values that come
//! from configuration.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Creates a validation error for violated invariants.
    ///
    /// # Example
    /// ```ignore
    /// if bank == inventory {
    ///     return Err(DomainError::validation("container widgets must differ"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = DomainError::invalid_id("abc");
        assert_eq!(err.to_string(), "Invalid ID format: abc");

        let err = DomainError::validation("widgets must differ");
        assert_eq!(err.to_string(), "Validation failed: widgets must differ");
    }
}
