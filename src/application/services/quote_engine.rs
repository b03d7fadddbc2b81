//! # Quote Engine
//!
//! The orchestrator: resolves the billed weight, looks up both endpoints
//! in the postal catalog, fetches and normalizes the carrier tariff, and
//! branches once on the caller's role category.
//!
//! Standard roles flow through rule selection, markup, and assembly into
//! a [`PricedQuote`]. Credit-based roles skip pricing entirely: the
//! engine checks the caller's usable credit blocks and returns them
//! alongside the normalized options. No credit is consumed here; booking
//! spends the credit later through the ledger's conditional update.

use crate::application::error::{QuoteError, QuoteResult};
use crate::application::services::{assembler, normalizer, pricing_rules};
use crate::domain::entities::{
    Caller, CreditQuote, QuoteOutcome, ResolvedLocation, ShipmentRequest,
};
use crate::domain::value_objects::dimensions::BilledDimensions;
use crate::domain::value_objects::role::RoleCategory;
use crate::infrastructure::carrier::{RateGateway, RateRequest};
use crate::infrastructure::location::LocationProvider;
use crate::infrastructure::persistence::{CreditLedger, PricingRuleRepository};
use std::sync::Arc;

/// The quote orchestrator.
///
/// Collaborators are injected as trait objects; the engine owns no I/O of
/// its own.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    gateway: Arc<dyn RateGateway>,
    locations: Arc<dyn LocationProvider>,
    pricing_rules: Arc<dyn PricingRuleRepository>,
    credit_ledger: Arc<dyn CreditLedger>,
}

impl QuoteEngine {
    /// Creates an engine from its collaborators.
    #[must_use]
    pub fn new(
        gateway: Arc<dyn RateGateway>,
        locations: Arc<dyn LocationProvider>,
        pricing_rules: Arc<dyn PricingRuleRepository>,
        credit_ledger: Arc<dyn CreditLedger>,
    ) -> Self {
        Self {
            gateway,
            locations,
            pricing_rules,
            credit_ledger,
        }
    }

    /// Produces a quote for one caller and shipment.
    ///
    /// # Errors
    ///
    /// Returns a [`QuoteError`] covering validation failures, unknown
    /// postal codes, carrier and catalog outages, missing pricing
    /// configuration, and exhausted credit.
    pub async fn quote(
        &self,
        caller: &Caller,
        request: &ShipmentRequest,
    ) -> QuoteResult<QuoteOutcome> {
        let dimensions = request.dimensions().resolve()?;
        tracing::info!(
            user_id = %caller.user_id,
            role = %caller.role,
            origin = %request.origin(),
            destination = %request.destination(),
            billed_weight_kg = dimensions.billed_weight_kg(),
            "quoting shipment"
        );

        let (origin, destination) = tokio::try_join!(
            self.locations.lookup(request.origin()),
            self.locations.lookup(request.destination()),
        )?;

        let rate_request = build_rate_request(request, &origin, &destination, dimensions);
        let document = self.gateway.fetch_rates(&rate_request).await?;
        let options = normalizer::normalize_document(&document);
        if options.is_empty() {
            return Err(QuoteError::NoValidOptions);
        }

        match caller.role.category() {
            RoleCategory::Credit => {
                let credit_blocks = self
                    .credit_ledger
                    .available_blocks(&caller.user_id, dimensions.billed_weight_kg())
                    .await?;
                if credit_blocks.is_empty() {
                    return Err(QuoteError::NoCreditsAvailable { options });
                }
                Ok(QuoteOutcome::CreditBacked(CreditQuote {
                    options,
                    credit_blocks,
                    origin,
                    destination,
                }))
            }
            RoleCategory::Standard => {
                let config = self
                    .pricing_rules
                    .pricing_for_role(caller.role)
                    .await?
                    .ok_or(QuoteError::NoPricingRule {
                        role: caller.role,
                        billed_weight_kg: dimensions.billed_weight_kg(),
                    })?;

                let (priced, applied_rule) =
                    pricing_rules::price_options(options, &config, dimensions.billed_weight_kg())?;
                let quote = assembler::assemble(priced, applied_rule, origin, destination)?;
                Ok(QuoteOutcome::Priced(quote))
            }
        }
    }
}

/// Builds the carrier request: caller-provided city overrides win over
/// the catalog's resolution.
fn build_rate_request(
    request: &ShipmentRequest,
    origin: &ResolvedLocation,
    destination: &ResolvedLocation,
    dimensions: BilledDimensions,
) -> RateRequest {
    let origin_city = request
        .origin_city()
        .or_else(|| origin.carrier_city())
        .map(str::to_string);
    let destination_city = request
        .destination_city()
        .or_else(|| destination.carrier_city())
        .map(str::to_string);

    RateRequest {
        origin_postal_code: request.origin().as_str().to_string(),
        origin_city,
        destination_postal_code: request.destination().as_str().to_string(),
        destination_city,
        dimensions,
        planned_shipping_date: request.planned_shipping_date(),
    }
}
