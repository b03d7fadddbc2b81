//! # Repository Ports
//!
//! Storage-agnostic access to pricing configuration and the credit
//! ledger.
//!
//! The quote path is read-only against both ports. Credit consumption is
//! a separate write operation with conditional-update semantics, so two
//! concurrent bookings cannot spend the same last credit.

use crate::domain::entities::{CreditBlock, RolePricingConfig};
use crate::domain::value_objects::role::AccountRole;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;
use uuid::Uuid;

/// Error type for repository operations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A referenced row does not exist.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        /// Entity kind, for diagnostics.
        entity_type: &'static str,
        /// Identifier that failed to resolve.
        id: String,
    },

    /// The backing store could not be reached.
    #[error("repository connection failed: {0}")]
    Connection(String),

    /// A query failed.
    #[error("repository query failed: {0}")]
    Query(String),

    /// Store-internal failure.
    #[error("repository error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query(message.into())
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Port for reading role pricing configuration.
#[async_trait]
pub trait PricingRuleRepository: Send + Sync + Debug {
    /// Loads the pricing configuration for a role.
    ///
    /// Returns `Ok(None)` when the role has no configuration at all; the
    /// caller decides whether that is fatal.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] on store failures.
    async fn pricing_for_role(
        &self,
        role: AccountRole,
    ) -> RepositoryResult<Option<RolePricingConfig>>;
}

/// Port for reading and spending prepaid credit blocks.
#[async_trait]
pub trait CreditLedger: Send + Sync + Debug {
    /// Lists the user's blocks that could cover one shipment of the given
    /// billed weight right now, best candidate first.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] on store failures.
    async fn available_blocks(
        &self,
        user_id: &str,
        billed_weight_kg: u32,
    ) -> RepositoryResult<Vec<CreditBlock>>;

    /// Atomically consumes one credit from a block.
    ///
    /// Returns `true` if a credit was spent, `false` if the block was
    /// already exhausted; the check and the increment happen under one
    /// guard.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the block does not exist.
    async fn consume_credit(&self, block_id: Uuid) -> RepositoryResult<bool>;
}
