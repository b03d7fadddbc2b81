//! # Pricing Rules
//!
//! Role- and weight-banded markup instructions, surcharge markup
//! configuration, and prepaid credit blocks.
//!
//! Rule rows carry their markup mode as the raw configuration string and
//! are resolved into a [`MarkupMode`] at application time, so that a
//! corrupted store surfaces as `UnknownPricingMode` for the affected
//! option instead of failing deserialization of the whole table.

use crate::domain::errors::DomainError;
use crate::domain::value_objects::money::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
use crate::domain::value_objects::role::AccountRole;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An inclusive weight band `[min_kg, max_kg]`.
///
/// Bands within one role are non-overlapping and ordered; selection uses
/// the band maximum only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightBand {
    /// Lower bound in kilograms, inclusive.
    pub min_kg: u32,
    /// Upper bound in kilograms, inclusive.
    pub max_kg: u32,
}

impl WeightBand {
    /// Creates a band.
    #[must_use]
    pub fn new(min_kg: u32, max_kg: u32) -> Self {
        Self { min_kg, max_kg }
    }

    /// Returns true if the weight falls within the band (inclusive).
    #[must_use]
    pub fn contains(&self, weight_kg: u32) -> bool {
        weight_kg >= self.min_kg && weight_kg <= self.max_kg
    }
}

/// How a markup rule transforms a carrier cost into a client price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupMode {
    /// `result = base × (1 + value/100)`.
    Percentage,
    /// `result = value`; the carrier base is ignored for the client price
    /// but retained for diagnostics.
    FixedOverride,
    /// `result = base + value`.
    FixedAdd,
}

impl MarkupMode {
    /// Resolves a stored mode string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownPricingMode`] for any string outside
    /// the supported set; the caller drops the affected option.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw.trim().to_uppercase().as_str() {
            "PERCENTAGE" => Ok(Self::Percentage),
            "FIXED_OVERRIDE" => Ok(Self::FixedOverride),
            "FIXED_ADD" => Ok(Self::FixedAdd),
            other => Err(DomainError::UnknownPricingMode(other.to_string())),
        }
    }

    /// Applies the markup to a base amount.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error if the computation overflows.
    pub fn apply(self, base: Decimal, value: Decimal) -> ArithmeticResult<Decimal> {
        match self {
            Self::Percentage => {
                let factor = Decimal::ONE.safe_add(
                    value
                        .checked_div(Decimal::ONE_HUNDRED)
                        .ok_or(ArithmeticError::Overflow)?,
                )?;
                base.safe_mul(factor)
            }
            Self::FixedOverride => Ok(value),
            Self::FixedAdd => base.safe_add(value),
        }
    }
}

/// One role + weight-band markup instruction, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRule {
    /// Row identifier.
    pub id: Uuid,
    /// Role the rule applies to.
    pub role: AccountRole,
    /// Weight band the rule covers.
    pub band: WeightBand,
    /// Markup mode as stored (`PERCENTAGE`, `FIXED_OVERRIDE`, `FIXED_ADD`).
    pub mode: String,
    /// Markup value: percent, override price, or fixed addition.
    pub value: Decimal,
    /// Currency of fixed values.
    pub currency: String,
}

impl PricingRule {
    /// Creates a rule row with a fresh identifier.
    #[must_use]
    pub fn new(
        role: AccountRole,
        band: WeightBand,
        mode: impl Into<String>,
        value: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            band,
            mode: mode.into(),
            value,
            currency: currency.into(),
        }
    }
}

/// Markup instruction for one surcharge kind, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurchargeMarkup {
    /// Markup mode as stored.
    pub mode: String,
    /// Markup value.
    pub value: Decimal,
}

impl SurchargeMarkup {
    /// Creates a surcharge markup instruction.
    #[must_use]
    pub fn new(mode: impl Into<String>, value: Decimal) -> Self {
        Self {
            mode: mode.into(),
            value,
        }
    }
}

/// Per-kind surcharge markup configuration.
///
/// Remote-area and special-handling surcharges are marked up
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurchargeMarkupConfig {
    /// Markup applied to the remote-area surcharge.
    pub remote_area: SurchargeMarkup,
    /// Markup applied to the overweight/oversize surcharge.
    pub special_handling: SurchargeMarkup,
}

/// The full pricing configuration for one role: its weight-banded rules
/// plus its surcharge markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePricingConfig {
    /// The configured role.
    pub role: AccountRole,
    /// Weight-banded rules; may be stored unsorted.
    pub bands: Vec<PricingRule>,
    /// Surcharge markup for this role.
    pub surcharges: SurchargeMarkupConfig,
}

/// A prepaid allowance for credit-based roles.
///
/// The quote path only checks availability; consumption happens on a
/// separate write path via the ledger's conditional update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditBlock {
    /// Row identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: String,
    /// Weight band the credits cover.
    pub band: WeightBand,
    /// Total credits purchased.
    pub credits_total: u32,
    /// Credits already consumed.
    pub credits_used: u32,
    /// Optional expiry; `None` never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreditBlock {
    /// Remaining credits in this block.
    #[must_use]
    pub fn credits_remaining(&self) -> u32 {
        self.credits_total.saturating_sub(self.credits_used)
    }

    /// Returns true if the block is expired at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// Returns true if the block can cover one shipment of the given
    /// billed weight at `now`.
    #[must_use]
    pub fn is_usable(&self, weight_kg: u32, now: DateTime<Utc>) -> bool {
        self.band.contains(weight_kg) && self.credits_remaining() > 0 && !self.is_expired(now)
    }
}
