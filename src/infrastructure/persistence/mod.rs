//! # Persistence
//!
//! Repository ports for pricing rules and prepaid credit blocks, plus
//! in-memory implementations seeded with the default rule table.

pub mod in_memory;
pub mod traits;

pub use in_memory::{InMemoryCreditLedger, InMemoryPricingRules};
pub use traits::{CreditLedger, PricingRuleRepository, RepositoryError, RepositoryResult};
