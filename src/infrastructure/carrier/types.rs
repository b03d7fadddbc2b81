//! # Carrier Wire Types
//!
//! Deserialization targets for the raw multi-product tariff document.
//!
//! Every field is optional or defaulted: the normalizer decides what is
//! usable, and unusable products are silently dropped rather than failing
//! deserialization of the whole document.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The raw tariff document returned by the carrier's `/rates` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RateDocument {
    /// Service tiers the carrier offers for the requested lane.
    #[serde(default)]
    pub products: Vec<RawCarrierProduct>,
}

/// One service tier as returned by the carrier; opaque until normalized.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCarrierProduct {
    /// Carrier product code.
    #[serde(default)]
    pub product_code: String,
    /// Carrier product name.
    #[serde(default)]
    pub product_name: String,
    /// Price-breakdown groups, one per currency/currency-type pair.
    #[serde(default)]
    pub detailed_price_breakdown: Vec<PriceBreakdownGroup>,
    /// Delivery-capability data with the estimated delivery timestamp.
    #[serde(default)]
    pub delivery_capabilities: Option<DeliveryCapabilities>,
    /// Product-level delivery timestamp (older document revisions).
    #[serde(default)]
    pub estimated_delivery_date_and_time: Option<String>,
    /// Alternate delivery field (older document revisions).
    #[serde(default)]
    pub delivery_time: Option<String>,
}

/// Delivery-capability data for one product.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCapabilities {
    /// Estimated delivery timestamp, ISO-like local time.
    #[serde(default)]
    pub estimated_delivery_date_and_time: Option<String>,
}

/// A bundle of priced line items sharing one currency and one
/// currency-type classification.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdownGroup {
    /// Currency code of the group.
    #[serde(default)]
    pub price_currency: Option<String>,
    /// Currency-type classifier (`BILLC` marks the billable group).
    #[serde(default)]
    pub currency_type: Option<String>,
    /// Named, priced line items.
    #[serde(default)]
    pub breakdown: Vec<PriceBreakdownItem>,
}

/// One named charge line within a breakdown group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceBreakdownItem {
    /// Free-text charge name, used for surcharge classification.
    #[serde(default)]
    pub name: Option<String>,
    /// Charge amount; items without a parseable price are skipped.
    #[serde(default)]
    pub price: Option<Decimal>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_document() {
        let document: RateDocument = serde_json::from_str(
            r#"{
                "products": [{
                    "productCode": "N",
                    "productName": "EXPRESS DOMESTIC",
                    "detailedPriceBreakdown": [{
                        "priceCurrency": "MXN",
                        "currencyType": "BILLC",
                        "breakdown": [
                            {"name": "EXPRESS DOMESTIC", "price": 120.4},
                            {"name": "REMOTE AREA DELIVERY", "price": 45.0}
                        ]
                    }],
                    "deliveryCapabilities": {
                        "estimatedDeliveryDateAndTime": "2025-11-12T23:59:00"
                    }
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(document.products.len(), 1);
        let product = &document.products[0];
        assert_eq!(product.product_code, "N");
        assert_eq!(product.detailed_price_breakdown[0].breakdown.len(), 2);
        assert_eq!(
            product
                .delivery_capabilities
                .as_ref()
                .unwrap()
                .estimated_delivery_date_and_time
                .as_deref(),
            Some("2025-11-12T23:59:00")
        );
    }

    #[test]
    fn tolerates_sparse_products() {
        let document: RateDocument =
            serde_json::from_str(r#"{"products": [{"productCode": "G"}]}"#).unwrap();
        let product = &document.products[0];
        assert!(product.detailed_price_breakdown.is_empty());
        assert!(product.delivery_capabilities.is_none());
    }

    #[test]
    fn empty_document_defaults() {
        let document: RateDocument = serde_json::from_str("{}").unwrap();
        assert!(document.products.is_empty());
    }
}
