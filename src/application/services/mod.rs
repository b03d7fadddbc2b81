//! # Application Services
//!
//! The quote pipeline, stage by stage:
//!
//! - [`normalizer`]: raw tariff document → normalized options
//! - [`pricing_rules`]: rule selection and markup application
//! - [`assembler`]: rounding, delivery display, summary
//! - [`quote_engine`]: the orchestrator tying the stages together

pub mod assembler;
pub mod normalizer;
pub mod pricing_rules;
pub mod quote_engine;

pub use quote_engine::QuoteEngine;
