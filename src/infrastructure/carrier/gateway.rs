//! # Rate Gateway
//!
//! The port through which the quote engine retrieves raw tariff
//! documents, and its DHL-style HTTP implementation.
//!
//! The gateway receives a fully resolved request (billed dimensions,
//! catalog-resolved city names) and owns everything carrier-specific:
//! endpoint selection, credentials, query shape, fixed request flags.

use crate::domain::value_objects::dimensions::BilledDimensions;
use crate::infrastructure::carrier::error::{CarrierError, CarrierResult};
use crate::infrastructure::carrier::http::RatesHttpClient;
use crate::infrastructure::carrier::types::RateDocument;
use crate::infrastructure::config::CarrierSettings;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Debug;

/// A resolved rate request, ready to be declared to the carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRequest {
    /// Origin postal code, five digits.
    pub origin_postal_code: String,
    /// Origin city name, when known.
    pub origin_city: Option<String>,
    /// Destination postal code, five digits.
    pub destination_postal_code: String,
    /// Destination city name, when known.
    pub destination_city: Option<String>,
    /// Rounded-up dimensions and billed weight.
    pub dimensions: BilledDimensions,
    /// Requested shipping date; the gateway defaults it to today.
    pub planned_shipping_date: Option<NaiveDate>,
}

/// Port for retrieving raw tariff documents from a carrier.
#[async_trait]
pub trait RateGateway: Send + Sync + Debug {
    /// Fetches the multi-product tariff document for one lane and parcel.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`] when the carrier is unreachable, rejects
    /// the credentials, or answers with an unusable payload.
    async fn fetch_rates(&self, request: &RateRequest) -> CarrierResult<RateDocument>;
}

/// Query-string shape of the carrier's `GET /rates` endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RatesQuery<'a> {
    account_number: &'a str,
    origin_country_code: &'static str,
    origin_postal_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    origin_city_name: Option<&'a str>,
    destination_country_code: &'static str,
    destination_postal_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_city_name: Option<&'a str>,
    weight: u32,
    length: u32,
    width: u32,
    height: u32,
    planned_shipping_date: String,
    is_customs_declarable: bool,
    unit_of_measurement: &'static str,
    next_business_day: bool,
}

/// DHL-style HTTP rate gateway.
///
/// Domestic-only: both country codes are fixed to `MX` and shipments are
/// declared as not customs-declarable, in metric units, with next-business-
/// day fallback enabled.
#[derive(Debug, Clone)]
pub struct DhlRateGateway {
    http: RatesHttpClient,
    base_url: String,
    account_number: String,
}

impl DhlRateGateway {
    /// Creates a gateway from carrier settings.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::Authentication`] when credentials are
    /// missing, or [`CarrierError::Internal`] on client construction
    /// failure.
    pub fn from_settings(settings: &CarrierSettings) -> CarrierResult<Self> {
        let http = RatesHttpClient::from_settings(settings)?;
        Ok(Self {
            http,
            base_url: settings.base_url().to_string(),
            account_number: settings.account_number.clone(),
        })
    }

    fn rates_url(&self) -> String {
        format!("{}/rates", self.base_url)
    }

    fn build_query<'a>(&'a self, request: &'a RateRequest) -> RatesQuery<'a> {
        let ship_date = request
            .planned_shipping_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        RatesQuery {
            account_number: &self.account_number,
            origin_country_code: "MX",
            origin_postal_code: &request.origin_postal_code,
            origin_city_name: request.origin_city.as_deref(),
            destination_country_code: "MX",
            destination_postal_code: &request.destination_postal_code,
            destination_city_name: request.destination_city.as_deref(),
            weight: request.dimensions.billed_weight_kg(),
            length: request.dimensions.length_cm(),
            width: request.dimensions.width_cm(),
            height: request.dimensions.height_cm(),
            planned_shipping_date: ship_date.format("%Y-%m-%d").to_string(),
            is_customs_declarable: false,
            unit_of_measurement: "metric",
            next_business_day: true,
        }
    }
}

#[async_trait]
impl RateGateway for DhlRateGateway {
    async fn fetch_rates(&self, request: &RateRequest) -> CarrierResult<RateDocument> {
        let query = self.build_query(request);
        tracing::info!(
            origin = %request.origin_postal_code,
            destination = %request.destination_postal_code,
            weight_kg = request.dimensions.billed_weight_kg(),
            "fetching carrier rates"
        );

        let document: RateDocument = self
            .http
            .get_with_params(&self.rates_url(), &query)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, "carrier rate request failed");
            })?;

        tracing::debug!(products = document.products.len(), "carrier rates received");
        Ok(document)
    }
}
