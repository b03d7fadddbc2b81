//! # Parcel Rates
//!
//! Shipping quote computation engine.
//!
//! Given a shipment's origin/destination postal codes and physical
//! dimensions, this crate derives a billable weight, retrieves tariff data
//! from an external carrier rate service, separates base cost from special
//! surcharges, applies role- and weight-band-specific markup rules, and
//! returns priced delivery options with human-readable delivery estimates.
//!
//! # Architecture
//!
//! The crate is organized in three layers:
//!
//! - [`domain`]: value objects (postal codes, dimensions, product codes,
//!   roles, money), entities (shipments, pricing rules, quote options) and
//!   pure domain services (delivery-date formatting).
//! - [`application`]: the quote pipeline — normalizer, pricing rule engine,
//!   assembler, and the orchestrating
//!   [`QuoteEngine`](application::services::quote_engine::QuoteEngine).
//! - [`infrastructure`]: adapters for the carrier rate API, the
//!   postal-code catalog, configuration, and the rule/credit stores.
//!
//! # Pipeline
//!
//! ```text
//! ShipmentRequest ──▶ Weight Resolver ──▶ Carrier Rate Gateway ──▶ Quote Normalizer
//!        │                                       ▲                        │
//!        └──▶ Location lookups (origin, dest) ───┘                        ▼
//!                                  Pricing Rule Engine ──▶ Quote Assembler ──▶ QuoteOutcome
//!                                  (or Credit Ledger, for credit-based roles)
//! ```
//!
//! Transport, authentication, and persistence backends are out of scope;
//! the engine consumes them through the traits in [`infrastructure`].

pub mod application;
pub mod domain;
pub mod infrastructure;
