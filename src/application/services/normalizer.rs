//! # Tariff Normalization
//!
//! Distills the carrier's raw multi-product tariff document into
//! [`NormalizedQuoteOption`]s.
//!
//! Per product:
//! - only allowed product codes survive; other tiers are dropped
//! - one breakdown group is selected per product, preferring the billable
//!   (`BILLC`) group and falling back to the first group
//! - every line item of the selected group lands in exactly one bucket:
//!   remote-area surcharge, special-handling surcharge, or base price
//! - the delivery timestamp is taken from the first populated source in
//!   a fixed fallback chain
//!
//! Normalization never fails: a malformed product yields no option, and a
//! document with no usable products yields an empty vector for the caller
//! to judge.

use crate::domain::entities::NormalizedQuoteOption;
use crate::domain::value_objects::money::CheckedArithmetic;
use crate::domain::value_objects::product_code::ProductCode;
use crate::infrastructure::carrier::types::{
    PriceBreakdownGroup, RateDocument, RawCarrierProduct,
};
use rust_decimal::Decimal;

/// Currency-type classifiers preferred when selecting a breakdown group,
/// in priority order.
pub const PREFERRED_CURRENCY_TYPES: &[&str] = &["BILLC"];

/// Charge-name fragments that mark a remote-area delivery surcharge.
const REMOTE_AREA_MARKERS: &[&str] = &["REMOTE AREA DELIVERY", "REMOTE AREA"];

/// Charge-name fragments that mark an overweight/oversize surcharge.
const SPECIAL_HANDLING_MARKERS: &[&str] =
    &["OVERWEIGHT PIECE", "OVERSIZE PIECE", "OVERSIZED PIECE"];

/// Classification of one charge line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChargeKind {
    RemoteArea,
    SpecialHandling,
    Base,
}

/// Classifies a charge by name: uppercase substring match, remote-area
/// markers checked before special-handling ones, first hit wins.
fn classify_charge(name: Option<&str>) -> ChargeKind {
    let Some(name) = name else {
        return ChargeKind::Base;
    };
    let upper = name.to_uppercase();

    if REMOTE_AREA_MARKERS.iter().any(|m| upper.contains(m)) {
        ChargeKind::RemoteArea
    } else if SPECIAL_HANDLING_MARKERS.iter().any(|m| upper.contains(m)) {
        ChargeKind::SpecialHandling
    } else {
        ChargeKind::Base
    }
}

/// Selects the breakdown group to price from: the first group whose
/// currency type matches a preferred classifier (tried in priority
/// order), else the document's first group.
fn select_group(groups: &[PriceBreakdownGroup]) -> Option<&PriceBreakdownGroup> {
    for preferred in PREFERRED_CURRENCY_TYPES {
        if let Some(group) = groups
            .iter()
            .find(|g| g.currency_type.as_deref() == Some(*preferred))
        {
            return Some(group);
        }
    }
    groups.first()
}

/// Extracts the delivery timestamp: delivery capabilities first, then the
/// product-level estimate, then the legacy delivery-time field.
fn delivery_timestamp(product: &RawCarrierProduct) -> Option<String> {
    product
        .delivery_capabilities
        .as_ref()
        .and_then(|c| c.estimated_delivery_date_and_time.clone())
        .or_else(|| product.estimated_delivery_date_and_time.clone())
        .or_else(|| product.delivery_time.clone())
        .filter(|s| !s.trim().is_empty())
}

/// Normalizes one raw product, or drops it.
fn normalize_product(product: &RawCarrierProduct) -> Option<NormalizedQuoteOption> {
    let product_code = ProductCode::parse_allowed(&product.product_code)?;
    let group = select_group(&product.detailed_price_breakdown)?;
    if group.breakdown.is_empty() {
        return None;
    }

    let mut base_price = Decimal::ZERO;
    let mut remote_area_surcharge = Decimal::ZERO;
    let mut special_handling_surcharge = Decimal::ZERO;

    for item in &group.breakdown {
        // Items without a parseable price contribute nothing. A sum that
        // overflows makes the whole product unusable.
        let Some(price) = item.price else { continue };
        match classify_charge(item.name.as_deref()) {
            ChargeKind::RemoteArea => {
                remote_area_surcharge = remote_area_surcharge.safe_add(price).ok()?;
            }
            ChargeKind::SpecialHandling => {
                special_handling_surcharge = special_handling_surcharge.safe_add(price).ok()?;
            }
            ChargeKind::Base => base_price = base_price.safe_add(price).ok()?,
        }
    }

    Some(NormalizedQuoteOption {
        product_code,
        product_name: product.product_name.clone(),
        currency: group.price_currency.clone().unwrap_or_default(),
        base_price,
        remote_area_surcharge,
        special_handling_surcharge,
        delivery_timestamp: delivery_timestamp(product),
    })
}

/// Normalizes a raw tariff document into quote options.
///
/// Products outside the allowed code set, or without a usable breakdown
/// group, are dropped silently.
#[must_use]
pub fn normalize_document(document: &RateDocument) -> Vec<NormalizedQuoteOption> {
    let options: Vec<NormalizedQuoteOption> = document
        .products
        .iter()
        .filter_map(normalize_product)
        .collect();

    tracing::debug!(
        raw_products = document.products.len(),
        options = options.len(),
        "normalized tariff document"
    );
    options
}
