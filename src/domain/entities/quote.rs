//! # Quote Options
//!
//! Quote data at each pipeline stage: normalized carrier options, priced
//! (pre-rounding) options, and the final rounded options returned to the
//! caller.

use crate::domain::entities::pricing_rule::{CreditBlock, WeightBand};
use crate::domain::entities::shipment::ResolvedLocation;
use crate::domain::value_objects::money::{ArithmeticResult, CheckedArithmetic};
use crate::domain::value_objects::product_code::ProductCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One allowed carrier service tier with its charges separated into base
/// price and surcharge buckets.
///
/// The three buckets partition the selected breakdown group: no line item
/// contributes to more than one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuoteOption {
    /// Carrier product code (allow-set member).
    pub product_code: ProductCode,
    /// Carrier product name.
    pub product_name: String,
    /// Currency of the selected breakdown group.
    pub currency: String,
    /// Sum of all charges except remote-area and overweight/oversize.
    pub base_price: Decimal,
    /// Accumulated remote-area delivery charges.
    pub remote_area_surcharge: Decimal,
    /// Accumulated overweight/oversize charges.
    pub special_handling_surcharge: Decimal,
    /// Raw estimated delivery timestamp, ISO-like, when the carrier
    /// provided one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_timestamp: Option<String>,
}

impl NormalizedQuoteOption {
    /// Total carrier price: base plus both surcharges.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error if the sum overflows.
    pub fn total_carrier_price(&self) -> ArithmeticResult<Decimal> {
        self.base_price
            .safe_add(self.remote_area_surcharge)?
            .safe_add(self.special_handling_surcharge)
    }

    /// Returns true if the carrier charged a remote-area surcharge.
    #[must_use]
    pub fn has_remote_area(&self) -> bool {
        self.remote_area_surcharge > Decimal::ZERO
    }

    /// Returns true if the carrier charged an overweight/oversize
    /// surcharge.
    #[must_use]
    pub fn has_special_handling(&self) -> bool {
        self.special_handling_surcharge > Decimal::ZERO
    }
}

/// A normalized option with its markup outcome, before rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedOption {
    /// The underlying normalized option (carrier figures, diagnostics).
    pub option: NormalizedQuoteOption,
    /// Base price after the role/weight rule.
    pub base_after_rule: Decimal,
    /// Remote-area surcharge after its markup.
    pub remote_after_markup: Decimal,
    /// Special-handling surcharge after its markup.
    pub special_after_markup: Decimal,
}

/// One final, rounded quote option as returned to the caller.
///
/// Every monetary figure is an integer rounded up from the computed
/// amount; the grand total is the sum of the already-rounded components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalQuoteOption {
    /// Carrier product code.
    pub product_code: ProductCode,
    /// Carrier product name.
    pub product_name: String,
    /// Quote currency.
    pub currency: String,
    /// Base price after the markup rule, rounded up.
    pub base_price_after_rule: i64,
    /// Remote-area surcharge after markup, rounded up.
    pub remote_area_surcharge: i64,
    /// Special-handling surcharge after markup, rounded up.
    pub special_handling_surcharge: i64,
    /// Sum of the rounded components above.
    pub grand_total: i64,
    /// Human-readable delivery estimate; absent when the carrier gave no
    /// timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_display: Option<String>,
}

/// Aggregate figures across all options of one quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    /// Shared currency across options.
    pub currency: String,
    /// Smallest grand total.
    pub min_total: i64,
    /// Largest grand total.
    pub max_total: i64,
    /// Number of options.
    pub count: usize,
}

/// The markup rule that was applied, echoed for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedRule {
    /// Weight band of the selected rule.
    pub band: WeightBand,
    /// Markup mode as stored.
    pub mode: String,
    /// Markup value.
    pub value: Decimal,
    /// Currency of fixed values.
    pub currency: String,
}

/// A fully priced quote for a standard role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedQuote {
    /// Final rounded options, one per allowed carrier tier.
    pub options: Vec<FinalQuoteOption>,
    /// Aggregate figures.
    pub summary: QuoteSummary,
    /// The rule that produced the base prices.
    pub applied_rule: AppliedRule,
    /// Resolved origin location.
    pub origin: ResolvedLocation,
    /// Resolved destination location.
    pub destination: ResolvedLocation,
}

/// A quote for a credit-based role: carrier options for display plus the
/// usable credit blocks. No credit is consumed on this path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditQuote {
    /// Normalized carrier options, unpriced.
    pub options: Vec<NormalizedQuoteOption>,
    /// Usable blocks, ordered by band then expiry; the first is the
    /// consumption candidate.
    pub credit_blocks: Vec<CreditBlock>,
    /// Resolved origin location.
    pub origin: ResolvedLocation,
    /// Resolved destination location.
    pub destination: ResolvedLocation,
}

/// Outcome of a successful quote request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum QuoteOutcome {
    /// Standard role priced through markup rules.
    #[serde(rename = "DYNAMIC_PRICING")]
    Priced(PricedQuote),
    /// Credit-based role with available credit.
    #[serde(rename = "CREDIT_BACKED")]
    CreditBacked(CreditQuote),
}

impl QuoteOutcome {
    /// Returns the priced quote, if this outcome is one.
    #[must_use]
    pub fn as_priced(&self) -> Option<&PricedQuote> {
        match self {
            Self::Priced(quote) => Some(quote),
            Self::CreditBacked(_) => None,
        }
    }

    /// Returns the credit-backed quote, if this outcome is one.
    #[must_use]
    pub fn as_credit_backed(&self) -> Option<&CreditQuote> {
        match self {
            Self::CreditBacked(quote) => Some(quote),
            Self::Priced(_) => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn option() -> NormalizedQuoteOption {
        NormalizedQuoteOption {
            product_code: ProductCode::parse_allowed("N").unwrap(),
            product_name: "EXPRESS DOMESTIC".to_string(),
            currency: "MXN".to_string(),
            base_price: Decimal::new(1204, 1),
            remote_area_surcharge: Decimal::new(450, 1),
            special_handling_surcharge: Decimal::ZERO,
            delivery_timestamp: Some("2025-11-12T23:59:00".to_string()),
        }
    }

    #[test]
    fn total_is_sum_of_buckets() {
        assert_eq!(option().total_carrier_price().unwrap(), Decimal::new(1654, 1));
    }

    #[test]
    fn total_overflow_is_an_error() {
        let mut opt = option();
        opt.base_price = Decimal::MAX;
        opt.remote_area_surcharge = Decimal::MAX;
        assert!(opt.total_carrier_price().is_err());
    }

    #[test]
    fn surcharge_flags() {
        let opt = option();
        assert!(opt.has_remote_area());
        assert!(!opt.has_special_handling());
    }

    #[test]
    fn final_option_serializes_camel_case_and_omits_missing_display() {
        let final_option = FinalQuoteOption {
            product_code: ProductCode::parse_allowed("G").unwrap(),
            product_name: "ECONOMY SELECT DOMESTIC".to_string(),
            currency: "MXN".to_string(),
            base_price_after_rule: 121,
            remote_area_surcharge: 54,
            special_handling_surcharge: 0,
            grand_total: 175,
            delivery_display: None,
        };
        let json = serde_json::to_value(&final_option).unwrap();
        assert_eq!(json["productCode"], "G");
        assert_eq!(json["grandTotal"], 175);
        assert!(json.get("deliveryDisplay").is_none());
    }

    #[test]
    fn outcome_accessors() {
        let outcome = QuoteOutcome::CreditBacked(CreditQuote {
            options: vec![option()],
            credit_blocks: vec![],
            origin: sample_location("50110"),
            destination: sample_location("92800"),
        });
        assert!(outcome.as_priced().is_none());
        assert_eq!(outcome.as_credit_backed().unwrap().options.len(), 1);
    }

    fn sample_location(cp: &str) -> ResolvedLocation {
        ResolvedLocation {
            postal_code: crate::domain::value_objects::PostalCode::parse(cp).unwrap(),
            municipality: None,
            state: None,
            city: None,
            zone: None,
        }
    }
}
