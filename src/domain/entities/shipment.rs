//! # Shipment Request
//!
//! Validated caller input and resolved location data.

use crate::domain::value_objects::dimensions::ShipmentDimensions;
use crate::domain::value_objects::postal_code::PostalCode;
use crate::domain::value_objects::role::AccountRole;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A quote request as accepted from the (out-of-scope) transport layer.
///
/// Immutable once constructed; all components are validated by their
/// respective value objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    origin: PostalCode,
    destination: PostalCode,
    dimensions: ShipmentDimensions,
    origin_city: Option<String>,
    destination_city: Option<String>,
    planned_shipping_date: Option<NaiveDate>,
}

impl ShipmentRequest {
    /// Creates a request from validated components.
    #[must_use]
    pub fn new(
        origin: PostalCode,
        destination: PostalCode,
        dimensions: ShipmentDimensions,
    ) -> Self {
        Self {
            origin,
            destination,
            dimensions,
            origin_city: None,
            destination_city: None,
            planned_shipping_date: None,
        }
    }

    /// Overrides the origin city name (otherwise taken from the postal
    /// catalog lookup).
    #[must_use]
    pub fn with_origin_city(mut self, city: impl Into<String>) -> Self {
        self.origin_city = Some(city.into());
        self
    }

    /// Overrides the destination city name.
    #[must_use]
    pub fn with_destination_city(mut self, city: impl Into<String>) -> Self {
        self.destination_city = Some(city.into());
        self
    }

    /// Sets the planned shipping date (defaults to today at the gateway).
    #[must_use]
    pub fn with_planned_shipping_date(mut self, date: NaiveDate) -> Self {
        self.planned_shipping_date = Some(date);
        self
    }

    /// Origin postal code.
    #[must_use]
    pub fn origin(&self) -> &PostalCode {
        &self.origin
    }

    /// Destination postal code.
    #[must_use]
    pub fn destination(&self) -> &PostalCode {
        &self.destination
    }

    /// Raw shipment measurements.
    #[must_use]
    pub fn dimensions(&self) -> &ShipmentDimensions {
        &self.dimensions
    }

    /// Caller-provided origin city override, if any.
    #[must_use]
    pub fn origin_city(&self) -> Option<&str> {
        self.origin_city.as_deref()
    }

    /// Caller-provided destination city override, if any.
    #[must_use]
    pub fn destination_city(&self) -> Option<&str> {
        self.destination_city.as_deref()
    }

    /// Planned shipping date, if supplied.
    #[must_use]
    pub fn planned_shipping_date(&self) -> Option<NaiveDate> {
        self.planned_shipping_date
    }
}

/// Location data resolved from a postal code by the catalog collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocation {
    /// The postal code that was looked up.
    pub postal_code: PostalCode,
    /// Municipality, when the catalog provides one.
    pub municipality: Option<String>,
    /// State name.
    pub state: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Catalog zone classifier.
    pub zone: Option<String>,
}

impl ResolvedLocation {
    /// The city name to declare on the carrier request: the catalog city,
    /// falling back to the municipality.
    #[must_use]
    pub fn carrier_city(&self) -> Option<&str> {
        self.city.as_deref().or(self.municipality.as_deref())
    }
}

/// The authenticated caller, as supplied by the upstream identity layer.
///
/// This engine never verifies credentials; it only consumes identity and
/// role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    /// Opaque user identifier, used for credit-ledger lookups.
    pub user_id: String,
    /// The caller's pricing role.
    pub role: AccountRole,
}

impl Caller {
    /// Creates a caller.
    #[must_use]
    pub fn new(user_id: impl Into<String>, role: AccountRole) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn request() -> ShipmentRequest {
        ShipmentRequest::new(
            PostalCode::parse("50110").unwrap(),
            PostalCode::parse("92800").unwrap(),
            ShipmentDimensions::new(
                Decimal::ONE,
                Decimal::TEN,
                Decimal::TEN,
                Decimal::TEN,
            )
            .unwrap(),
        )
    }

    #[test]
    fn builder_sets_optional_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 11).unwrap();
        let req = request()
            .with_origin_city("Toluca")
            .with_destination_city("Tuxpan")
            .with_planned_shipping_date(date);

        assert_eq!(req.origin_city(), Some("Toluca"));
        assert_eq!(req.destination_city(), Some("Tuxpan"));
        assert_eq!(req.planned_shipping_date(), Some(date));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let req = request();
        assert!(req.origin_city().is_none());
        assert!(req.planned_shipping_date().is_none());
    }

    #[test]
    fn carrier_city_prefers_city_over_municipality() {
        let location = ResolvedLocation {
            postal_code: PostalCode::parse("50110").unwrap(),
            municipality: Some("Toluca".to_string()),
            state: Some("México".to_string()),
            city: Some("Toluca de Lerdo".to_string()),
            zone: None,
        };
        assert_eq!(location.carrier_city(), Some("Toluca de Lerdo"));
    }

    #[test]
    fn carrier_city_falls_back_to_municipality() {
        let location = ResolvedLocation {
            postal_code: PostalCode::parse("92800").unwrap(),
            municipality: Some("Tuxpan".to_string()),
            state: Some("Veracruz".to_string()),
            city: None,
            zone: None,
        };
        assert_eq!(location.carrier_city(), Some("Tuxpan"));
    }
}
