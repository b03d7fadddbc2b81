//! # Entities
//!
//! Domain entities for shipment quoting.
//!
//! - [`shipment`]: the caller's request, resolved locations, caller identity
//! - [`pricing_rule`]: markup rules, surcharge configuration, credit blocks
//! - [`quote`]: normalized, priced, and final quote options

pub mod pricing_rule;
pub mod quote;
pub mod shipment;

pub use pricing_rule::{
    CreditBlock, MarkupMode, PricingRule, RolePricingConfig, SurchargeMarkup,
    SurchargeMarkupConfig, WeightBand,
};
pub use quote::{
    AppliedRule, CreditQuote, FinalQuoteOption, NormalizedQuoteOption, PricedOption, PricedQuote,
    QuoteOutcome, QuoteSummary,
};
pub use shipment::{Caller, ResolvedLocation, ShipmentRequest};
