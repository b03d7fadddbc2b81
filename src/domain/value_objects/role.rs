//! # Account Roles
//!
//! Caller roles and their pricing dispatch category.
//!
//! The pipeline branches exactly once on [`RoleCategory`]: standard roles
//! go through the pricing rule engine, credit-based roles through the
//! credit ledger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account roles known to the pricing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountRole {
    /// Retail customers; highest markup bands.
    Minorista,
    /// Wholesale customers.
    Mayorista,
    /// Resellers; lowest markup bands.
    Revendedor,
    /// Marketplace accounts paying from a prepaid credit allowance.
    MercadoLibre,
}

/// Pricing dispatch category for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleCategory {
    /// Priced through role- and weight-banded markup rules.
    Standard,
    /// Priced through prepaid, weight-banded credit blocks.
    Credit,
}

impl AccountRole {
    /// Returns the pricing dispatch category for this role.
    #[must_use]
    pub fn category(self) -> RoleCategory {
        match self {
            Self::Minorista | Self::Mayorista | Self::Revendedor => RoleCategory::Standard,
            Self::MercadoLibre => RoleCategory::Credit,
        }
    }

    /// Returns the canonical uppercase name used by the configuration store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minorista => "MINORISTA",
            Self::Mayorista => "MAYORISTA",
            Self::Revendedor => "REVENDEDOR",
            Self::MercadoLibre => "MERCADOLIBRE",
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MINORISTA" => Ok(Self::Minorista),
            "MAYORISTA" => Ok(Self::Mayorista),
            "REVENDEDOR" => Ok(Self::Revendedor),
            "MERCADOLIBRE" => Ok(Self::MercadoLibre),
            other => Err(format!("unknown account role: {}", other)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "minorista".parse::<AccountRole>().unwrap(),
            AccountRole::Minorista
        );
        assert_eq!(
            " MERCADOLIBRE ".parse::<AccountRole>().unwrap(),
            AccountRole::MercadoLibre
        );
    }

    #[test]
    fn rejects_unknown_role() {
        assert!("ADMIN".parse::<AccountRole>().is_err());
    }

    #[test]
    fn categories() {
        assert_eq!(AccountRole::Minorista.category(), RoleCategory::Standard);
        assert_eq!(AccountRole::Mayorista.category(), RoleCategory::Standard);
        assert_eq!(AccountRole::Revendedor.category(), RoleCategory::Standard);
        assert_eq!(AccountRole::MercadoLibre.category(), RoleCategory::Credit);
    }

    #[test]
    fn display_matches_store_keys() {
        assert_eq!(AccountRole::Revendedor.to_string(), "REVENDEDOR");
    }
}
