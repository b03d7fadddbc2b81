//! # In-Memory Repositories
//!
//! Lock-guarded in-memory implementations of the pricing-rule and
//! credit-ledger ports, suitable for tests and single-process
//! deployments.
//!
//! [`InMemoryPricingRules::with_default_rules`] seeds the standard markup
//! table: five weight bands per role, percentages falling as weight
//! rises, and per-role surcharge markups.

use crate::domain::entities::{
    CreditBlock, PricingRule, RolePricingConfig, SurchargeMarkup, SurchargeMarkupConfig,
    WeightBand,
};
use crate::domain::value_objects::role::AccountRole;
use crate::infrastructure::persistence::traits::{
    CreditLedger, PricingRuleRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

/// Standard weight bands shared by every seeded role, in kilograms.
const DEFAULT_BANDS: [(u32, u32); 5] = [(0, 1), (2, 5), (6, 10), (11, 20), (21, 30)];

/// In-memory pricing-rule store.
#[derive(Debug, Default)]
pub struct InMemoryPricingRules {
    configs: RwLock<HashMap<AccountRole, RolePricingConfig>>,
}

impl InMemoryPricingRules {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the default markup table for the three
    /// standard-pricing roles.
    #[must_use]
    pub fn with_default_rules() -> Self {
        let store = Self::new();
        store.insert(default_role_config(AccountRole::Minorista, [35, 32, 30, 28, 25], 20, 15));
        store.insert(default_role_config(AccountRole::Mayorista, [25, 22, 20, 18, 15], 15, 10));
        store.insert(default_role_config(AccountRole::Revendedor, [18, 16, 14, 12, 10], 10, 8));
        store
    }

    /// Inserts or replaces a role's configuration.
    pub fn insert(&self, config: RolePricingConfig) {
        self.configs.write().insert(config.role, config);
    }
}

fn default_role_config(
    role: AccountRole,
    percentages: [u32; 5],
    remote_percent: u32,
    special_percent: u32,
) -> RolePricingConfig {
    let bands = DEFAULT_BANDS
        .iter()
        .zip(percentages)
        .map(|(&(min_kg, max_kg), percent)| {
            PricingRule::new(
                role,
                WeightBand::new(min_kg, max_kg),
                "PERCENTAGE",
                Decimal::from(percent),
                "MXN",
            )
        })
        .collect();

    RolePricingConfig {
        role,
        bands,
        surcharges: SurchargeMarkupConfig {
            remote_area: SurchargeMarkup::new("PERCENTAGE", Decimal::from(remote_percent)),
            special_handling: SurchargeMarkup::new("PERCENTAGE", Decimal::from(special_percent)),
        },
    }
}

#[async_trait]
impl PricingRuleRepository for InMemoryPricingRules {
    async fn pricing_for_role(
        &self,
        role: AccountRole,
    ) -> RepositoryResult<Option<RolePricingConfig>> {
        Ok(self.configs.read().get(&role).cloned())
    }
}

/// In-memory credit ledger.
#[derive(Debug, Default)]
pub struct InMemoryCreditLedger {
    blocks: RwLock<Vec<CreditBlock>>,
}

impl InMemoryCreditLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a credit block.
    pub fn insert(&self, block: CreditBlock) {
        self.blocks.write().push(block);
    }
}

#[async_trait]
impl CreditLedger for InMemoryCreditLedger {
    async fn available_blocks(
        &self,
        user_id: &str,
        billed_weight_kg: u32,
    ) -> RepositoryResult<Vec<CreditBlock>> {
        let now = Utc::now();
        let mut usable: Vec<CreditBlock> = self
            .blocks
            .read()
            .iter()
            .filter(|block| block.user_id == user_id && block.is_usable(billed_weight_kg, now))
            .cloned()
            .collect();

        // Tightest band first; among equal bands, the nearest expiry is
        // spent before never-expiring blocks.
        usable.sort_by(|a, b| {
            a.band
                .max_kg
                .cmp(&b.band.max_kg)
                .then_with(|| match (a.expires_at, b.expires_at) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                })
        });

        Ok(usable)
    }

    async fn consume_credit(&self, block_id: Uuid) -> RepositoryResult<bool> {
        let mut blocks = self.blocks.write();
        let block = blocks
            .iter_mut()
            .find(|block| block.id == block_id)
            .ok_or_else(|| RepositoryError::not_found("credit block", block_id.to_string()))?;

        if block.credits_used < block.credits_total {
            block.credits_used += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn default_table_covers_standard_roles() {
        let store = InMemoryPricingRules::with_default_rules();

        let config = store
            .pricing_for_role(AccountRole::Minorista)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(config.bands.len(), 5);
        assert_eq!(config.bands[0].value, Decimal::from(35));
        assert_eq!(config.bands[4].band, WeightBand::new(21, 30));
        assert_eq!(config.surcharges.remote_area.value, Decimal::from(20));

        let config = store
            .pricing_for_role(AccountRole::Revendedor)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(config.bands[4].value, Decimal::from(10));
        assert_eq!(config.surcharges.special_handling.value, Decimal::from(8));
    }

    #[tokio::test]
    async fn credit_roles_have_no_default_config() {
        let store = InMemoryPricingRules::with_default_rules();
        let config = store
            .pricing_for_role(AccountRole::MercadoLibre)
            .await
            .unwrap();
        assert!(config.is_none());
    }

    fn block(user_id: &str, band: WeightBand, used: u32, total: u32) -> CreditBlock {
        CreditBlock {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            band,
            credits_total: total,
            credits_used: used,
            expires_at: None,
        }
    }

    #[tokio::test]
    async fn available_blocks_filters_and_sorts() {
        let ledger = InMemoryCreditLedger::new();
        ledger.insert(block("user-1", WeightBand::new(0, 30), 0, 5));
        ledger.insert(block("user-1", WeightBand::new(0, 5), 0, 5));
        ledger.insert(block("user-1", WeightBand::new(0, 5), 5, 5)); // exhausted
        ledger.insert(block("user-2", WeightBand::new(0, 5), 0, 5)); // other user
        ledger.insert(block("user-1", WeightBand::new(10, 30), 0, 5)); // wrong band

        let usable = ledger.available_blocks("user-1", 3).await.unwrap();
        assert_eq!(usable.len(), 2);
        // Tightest band first.
        assert_eq!(usable[0].band, WeightBand::new(0, 5));
        assert_eq!(usable[1].band, WeightBand::new(0, 30));
    }

    #[tokio::test]
    async fn expiring_blocks_sort_before_perpetual_ones() {
        let ledger = InMemoryCreditLedger::new();
        let soon = Utc::now() + Duration::days(7);

        let mut expiring = block("user-1", WeightBand::new(0, 5), 0, 5);
        expiring.expires_at = Some(soon);
        let perpetual = block("user-1", WeightBand::new(0, 5), 0, 5);
        let expiring_id = expiring.id;

        ledger.insert(perpetual);
        ledger.insert(expiring);

        let usable = ledger.available_blocks("user-1", 3).await.unwrap();
        assert_eq!(usable[0].id, expiring_id);
    }

    #[tokio::test]
    async fn consume_credit_is_conditional() {
        let ledger = InMemoryCreditLedger::new();
        let b = block("user-1", WeightBand::new(0, 5), 4, 5);
        let id = b.id;
        ledger.insert(b);

        assert!(ledger.consume_credit(id).await.unwrap());
        // Now exhausted: the second attempt spends nothing.
        assert!(!ledger.consume_credit(id).await.unwrap());

        let usable = ledger.available_blocks("user-1", 3).await.unwrap();
        assert!(usable.is_empty());
    }

    #[tokio::test]
    async fn consume_credit_unknown_block() {
        let ledger = InMemoryCreditLedger::new();
        let err = ledger.consume_credit(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }
}
