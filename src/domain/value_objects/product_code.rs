//! # Product Code
//!
//! Carrier service-tier identifiers this system is willing to quote.
//!
//! The carrier returns many product tiers; only the codes in
//! [`ALLOWED_PRODUCT_CODES`] produce quote options. Codes in the
//! date-only subset render their delivery estimate without a time
//! component.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product codes accepted from the carrier tariff document.
pub const ALLOWED_PRODUCT_CODES: &[&str] = &["1", "O", "N", "G"];

/// Product codes whose delivery estimate renders as a date only.
pub const DATE_ONLY_PRODUCT_CODES: &[&str] = &["N", "G"];

/// A carrier product code from the allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    /// Parses a carrier product code, accepting only the allowed set.
    ///
    /// Returns `None` for any other tier; callers discard those products.
    #[must_use]
    pub fn parse_allowed(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        ALLOWED_PRODUCT_CODES
            .contains(&trimmed)
            .then(|| Self(trimmed.to_string()))
    }

    /// Returns the wire representation of the code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this tier's delivery estimate is rendered
    /// without a time component.
    #[must_use]
    pub fn is_date_only(&self) -> bool {
        DATE_ONLY_PRODUCT_CODES.contains(&self.0.as_str())
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
