//! # Domain Errors
//!
//! Error types for business-rule violations and malformed input.

use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed or missing input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed input on a specific field.
    #[error("validation error on {field}: {message}")]
    FieldValidation {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description.
        message: String,
    },

    /// A stored markup mode string is not one of the supported modes.
    ///
    /// Signals configuration corruption: the mode came from the pricing
    /// configuration store, not from caller input.
    #[error("unknown pricing mode: {0}")]
    UnknownPricingMode(String),
}

impl DomainError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a field-scoped validation error.
    #[must_use]
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        Self::FieldValidation {
            field,
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error (field-scoped or not).
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::FieldValidation { .. })
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
