//! # Configuration
//!
//! Typed settings for the carrier rate service and the postal-code
//! catalog, loadable from the environment.
//!
//! Environment variables use the `PARCEL_RATES` prefix with `__` as the
//! level separator, e.g. `PARCEL_RATES__CARRIER__USERNAME` or
//! `PARCEL_RATES__LOCATION__API_KEY`.

use serde::Deserialize;
use std::fmt;

/// Default TEST-mode base URL of the carrier rate API.
pub const DEFAULT_CARRIER_TEST_BASE_URL: &str = "https://express.api.dhl.com/mydhlapi/test";
/// Default PROD-mode base URL of the carrier rate API.
pub const DEFAULT_CARRIER_PROD_BASE_URL: &str = "https://express.api.dhl.com/mydhlapi";
/// Default carrier API version sent in the `x-version` header.
pub const DEFAULT_CARRIER_API_VERSION: &str = "3.1.0";
/// Default base URL of the postal-code catalog.
pub const DEFAULT_LOCATION_BASE_URL: &str =
    "https://api-codigos-postales-mx-production.up.railway.app";

/// Carrier environment selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CarrierMode {
    /// Sandbox endpoint and credentials.
    #[default]
    Test,
    /// Production endpoint and credentials.
    Prod,
}

impl fmt::Display for CarrierMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Test => write!(f, "TEST"),
            Self::Prod => write!(f, "PROD"),
        }
    }
}

/// Settings for the carrier rate service adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarrierSettings {
    /// TEST or PROD endpoint selection.
    pub mode: CarrierMode,
    /// Base URL used in TEST mode.
    pub test_base_url: String,
    /// Base URL used in PROD mode.
    pub prod_base_url: String,
    /// Basic Auth username.
    pub username: String,
    /// Basic Auth password.
    pub password: String,
    /// Carrier account number declared on every rate request.
    pub account_number: String,
    /// Value of the `x-version` header.
    pub api_version: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for CarrierSettings {
    fn default() -> Self {
        Self {
            mode: CarrierMode::Test,
            test_base_url: DEFAULT_CARRIER_TEST_BASE_URL.to_string(),
            prod_base_url: DEFAULT_CARRIER_PROD_BASE_URL.to_string(),
            username: String::new(),
            password: String::new(),
            account_number: String::new(),
            api_version: DEFAULT_CARRIER_API_VERSION.to_string(),
            timeout_ms: 15_000,
        }
    }
}

impl CarrierSettings {
    /// Returns the base URL for the configured mode, without a trailing
    /// slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        let url = match self.mode {
            CarrierMode::Test => &self.test_base_url,
            CarrierMode::Prod => &self.prod_base_url,
        };
        url.trim_end_matches('/')
    }

    /// Returns true if both Basic Auth credentials are present.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Settings for the postal-code catalog adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocationSettings {
    /// Catalog base URL.
    pub base_url: String,
    /// Value of the `X-Api-Key` header.
    pub api_key: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LOCATION_BASE_URL.to_string(),
            api_key: String::new(),
            timeout_ms: 8_000,
        }
    }
}

/// Top-level settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Carrier rate service settings.
    pub carrier: CarrierSettings,
    /// Postal-code catalog settings.
    pub location: LocationSettings,
}

impl Settings {
    /// Loads settings from the environment (`PARCEL_RATES` prefix, `__`
    /// separator), falling back to defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a present variable cannot be
    /// deserialized into its typed field.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("PARCEL_RATES").separator("__"))
            .build()?
            .try_deserialize()
    }
}
