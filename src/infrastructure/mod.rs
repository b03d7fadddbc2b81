//! # Infrastructure Layer
//!
//! Adapters for external collaborators: the carrier rate API, the
//! postal-code catalog, environment-driven configuration, and the
//! pricing-rule / credit-ledger stores.

pub mod carrier;
pub mod config;
pub mod location;
pub mod persistence;
