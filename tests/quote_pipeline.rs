//! End-to-end quote pipeline tests against mocked HTTP collaborators.
//!
//! The real carrier gateway and postal catalog client run against a
//! wiremock server; only the stores are in-memory.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]

use parcel_rates::application::error::QuoteError;
use parcel_rates::application::services::QuoteEngine;
use parcel_rates::domain::entities::{Caller, ShipmentRequest};
use parcel_rates::domain::value_objects::PostalCode;
use parcel_rates::domain::value_objects::dimensions::ShipmentDimensions;
use parcel_rates::domain::value_objects::role::AccountRole;
use parcel_rates::infrastructure::carrier::DhlRateGateway;
use parcel_rates::infrastructure::config::{CarrierSettings, LocationSettings};
use parcel_rates::infrastructure::location::PostalCatalogClient;
use parcel_rates::infrastructure::persistence::{InMemoryCreditLedger, InMemoryPricingRules};
use rust_decimal::Decimal;
use std::sync::Arc;
use wiremock::matchers::{basic_auth, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USERNAME: &str = "api-user";
const PASSWORD: &str = "api-secret";
const API_KEY: &str = "catalog-key";

/// Makes pipeline traces visible on failure; `RUST_LOG` controls the
/// level.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn carrier_settings(server: &MockServer) -> CarrierSettings {
    CarrierSettings {
        test_base_url: server.uri(),
        username: USERNAME.to_string(),
        password: PASSWORD.to_string(),
        account_number: "987654321".to_string(),
        ..CarrierSettings::default()
    }
}

fn location_settings(server: &MockServer) -> LocationSettings {
    LocationSettings {
        base_url: server.uri(),
        api_key: API_KEY.to_string(),
        ..LocationSettings::default()
    }
}

fn tariff_body() -> serde_json::Value {
    serde_json::json!({
        "products": [
            {
                "productCode": "N",
                "productName": "EXPRESS DOMESTIC",
                "detailedPriceBreakdown": [{
                    "priceCurrency": "MXN",
                    "currencyType": "BILLC",
                    "breakdown": [
                        {"name": "EXPRESS DOMESTIC", "price": 100.0},
                        {"name": "FUEL SURCHARGE", "price": 20.4},
                        {"name": "REMOTE AREA DELIVERY", "price": 45.0}
                    ]
                }],
                "deliveryCapabilities": {
                    "estimatedDeliveryDateAndTime": "2025-11-12T23:59:00"
                }
            },
            {
                "productCode": "P",
                "productName": "EXPRESS WORLDWIDE",
                "detailedPriceBreakdown": [{
                    "priceCurrency": "MXN",
                    "currencyType": "BILLC",
                    "breakdown": [{"name": "EXPRESS WORLDWIDE", "price": 900.0}]
                }]
            }
        ]
    })
}

fn catalog_body(municipio: &str, ciudad: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "cp": "00000",
        "resultados": [{
            "municipio": municipio,
            "estado": "México",
            "ciudad": ciudad,
            "zona": "Urbana"
        }]
    })
}

async fn mount_catalog(server: &MockServer, cp: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/cp/{}", cp)))
        .and(header("X-Api-Key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn engine(server: &MockServer, rules: InMemoryPricingRules) -> QuoteEngine {
    let gateway = DhlRateGateway::from_settings(&carrier_settings(server)).unwrap();
    let catalog = PostalCatalogClient::from_settings(&location_settings(server)).unwrap();
    QuoteEngine::new(
        Arc::new(gateway),
        Arc::new(catalog),
        Arc::new(rules),
        Arc::new(InMemoryCreditLedger::new()),
    )
}

fn request() -> ShipmentRequest {
    ShipmentRequest::new(
        PostalCode::parse("50110").unwrap(),
        PostalCode::parse("92800").unwrap(),
        ShipmentDimensions::new(Decimal::ONE, Decimal::TEN, Decimal::TEN, Decimal::TEN).unwrap(),
    )
}

#[tokio::test]
async fn full_pipeline_prices_a_standard_quote() {
    init_tracing();
    let server = MockServer::start().await;

    mount_catalog(&server, "50110", catalog_body("Toluca", Some("Toluca de Lerdo"))).await;
    mount_catalog(&server, "92800", catalog_body("Tuxpan", None)).await;

    Mock::given(method("GET"))
        .and(path("/rates"))
        .and(basic_auth(USERNAME, PASSWORD))
        .and(header("x-version", "3.1.0"))
        .and(query_param("accountNumber", "987654321"))
        .and(query_param("originCountryCode", "MX"))
        .and(query_param("originPostalCode", "50110"))
        .and(query_param("originCityName", "Toluca de Lerdo"))
        .and(query_param("destinationPostalCode", "92800"))
        .and(query_param("destinationCityName", "Tuxpan"))
        .and(query_param("weight", "1"))
        .and(query_param("unitOfMeasurement", "metric"))
        .and(query_param("isCustomsDeclarable", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tariff_body()))
        .expect(1)
        .mount(&server)
        .await;

    let engine = engine(&server, InMemoryPricingRules::with_default_rules());
    let caller = Caller::new("user-1", AccountRole::Minorista);

    let outcome = engine.quote(&caller, &request()).await.unwrap();
    let quote = outcome.as_priced().unwrap();

    // The disallowed tier was dropped.
    assert_eq!(quote.options.len(), 1);
    let option = &quote.options[0];

    // Base 120.4 at 35 % → 162.54 → 163; remote 45 at 20 % → 54.
    assert_eq!(option.base_price_after_rule, 163);
    assert_eq!(option.remote_area_surcharge, 54);
    assert_eq!(option.special_handling_surcharge, 0);
    assert_eq!(option.grand_total, 217);
    assert_eq!(option.currency, "MXN");
    assert_eq!(
        option.delivery_display.as_deref(),
        Some("Miércoles 12 de Noviembre de 2025")
    );

    assert_eq!(quote.summary.min_total, 217);
    assert_eq!(quote.summary.count, 1);
    assert_eq!(quote.origin.city.as_deref(), Some("Toluca de Lerdo"));
    assert_eq!(quote.destination.municipality.as_deref(), Some("Tuxpan"));
}

#[tokio::test]
async fn carrier_rejecting_credentials_surfaces_as_invalid_credentials() {
    init_tracing();
    let server = MockServer::start().await;

    mount_catalog(&server, "50110", catalog_body("Toluca", None)).await;
    mount_catalog(&server, "92800", catalog_body("Tuxpan", None)).await;

    Mock::given(method("GET"))
        .and(path("/rates"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
        .mount(&server)
        .await;

    let engine = engine(&server, InMemoryPricingRules::with_default_rules());
    let caller = Caller::new("user-1", AccountRole::Minorista);

    let err = engine.quote(&caller, &request()).await.unwrap_err();
    assert!(matches!(err, QuoteError::InvalidCredentials(_)));
}

#[tokio::test]
async fn unknown_postal_code_surfaces_as_location_not_found() {
    init_tracing();
    let server = MockServer::start().await;

    mount_catalog(&server, "50110", catalog_body("Toluca", None)).await;
    Mock::given(method("GET"))
        .and(path("/api/cp/92800"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cp": "92800",
            "resultados": []
        })))
        .mount(&server)
        .await;

    let engine = engine(&server, InMemoryPricingRules::with_default_rules());
    let caller = Caller::new("user-1", AccountRole::Minorista);

    let err = engine.quote(&caller, &request()).await.unwrap_err();
    match err {
        QuoteError::LocationNotFound { postal_code } => assert_eq!(postal_code, "92800"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn carrier_outage_surfaces_as_carrier_unavailable() {
    init_tracing();
    let server = MockServer::start().await;

    mount_catalog(&server, "50110", catalog_body("Toluca", None)).await;
    mount_catalog(&server, "92800", catalog_body("Tuxpan", None)).await;

    Mock::given(method("GET"))
        .and(path("/rates"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let engine = engine(&server, InMemoryPricingRules::with_default_rules());
    let caller = Caller::new("user-1", AccountRole::Minorista);

    let err = engine.quote(&caller, &request()).await.unwrap_err();
    match err {
        QuoteError::CarrierUnavailable(message) => assert!(message.contains("503")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn tariff_without_allowed_tiers_is_no_valid_options() {
    init_tracing();
    let server = MockServer::start().await;

    mount_catalog(&server, "50110", catalog_body("Toluca", None)).await;
    mount_catalog(&server, "92800", catalog_body("Tuxpan", None)).await;

    Mock::given(method("GET"))
        .and(path("/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "products": [{
                "productCode": "P",
                "detailedPriceBreakdown": [{
                    "currencyType": "BILLC",
                    "breakdown": [{"name": "EXPRESS WORLDWIDE", "price": 900.0}]
                }]
            }]
        })))
        .mount(&server)
        .await;

    let engine = engine(&server, InMemoryPricingRules::with_default_rules());
    let caller = Caller::new("user-1", AccountRole::Minorista);

    let err = engine.quote(&caller, &request()).await.unwrap_err();
    assert!(matches!(err, QuoteError::NoValidOptions));
}

#[tokio::test]
async fn bulky_parcel_declares_volumetric_weight_to_the_carrier() {
    init_tracing();
    let server = MockServer::start().await;

    mount_catalog(&server, "50110", catalog_body("Toluca", None)).await;
    mount_catalog(&server, "92800", catalog_body("Tuxpan", None)).await;

    // 1 kg at 30×30×30 cm bills at ceil(27000/5000) = 6 kg.
    Mock::given(method("GET"))
        .and(path("/rates"))
        .and(query_param("weight", "6"))
        .and(query_param("length", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tariff_body()))
        .expect(1)
        .mount(&server)
        .await;

    let engine = engine(&server, InMemoryPricingRules::with_default_rules());
    let caller = Caller::new("user-1", AccountRole::Minorista);
    let bulky = ShipmentRequest::new(
        PostalCode::parse("50110").unwrap(),
        PostalCode::parse("92800").unwrap(),
        ShipmentDimensions::new(
            Decimal::ONE,
            Decimal::from(30),
            Decimal::from(30),
            Decimal::from(30),
        )
        .unwrap(),
    );

    let outcome = engine.quote(&caller, &bulky).await.unwrap();
    let quote = outcome.as_priced().unwrap();

    // 6 kg falls in the 6–10 band: 30 % instead of 35 %.
    assert_eq!(quote.applied_rule.value, Decimal::from(30));
    // 120.4 × 1.30 = 156.52 → 157.
    assert_eq!(quote.options[0].base_price_after_rule, 157);
}
