//! # Postal Code
//!
//! Validated 5-digit numeric postal code.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Mexican postal code: exactly five ASCII digits.
///
/// Surrounding whitespace is trimmed on construction; anything else is
/// rejected before any external call is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Parses and validates a postal code.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the input is not exactly five digits.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.len() == 5 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(DomainError::validation(format!(
                "postal code must be exactly 5 digits, got {:?}",
                raw
            )))
        }
    }

    /// Returns the postal code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
