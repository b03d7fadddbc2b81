//! # Postal-Code Catalog
//!
//! Resolution of postal codes into municipality, state, city, and zone
//! through the external postal catalog.
//!
//! The catalog is consulted once per endpoint (origin and destination) per
//! quote request. An unknown postal code is a caller error, not a system
//! fault, and is reported as [`LocationError::NotFound`].

use crate::domain::entities::ResolvedLocation;
use crate::domain::value_objects::postal_code::PostalCode;
use crate::infrastructure::config::LocationSettings;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;

/// Error type for postal catalog lookups.
#[derive(Debug, Clone, Error)]
pub enum LocationError {
    /// The catalog has no entry for the postal code.
    #[error("postal code {postal_code} not found")]
    NotFound {
        /// The postal code that failed to resolve.
        postal_code: String,
    },

    /// No catalog API key is configured.
    #[error("postal catalog API key is not configured")]
    MissingApiKey,

    /// The catalog could not be reached.
    #[error("postal catalog connection failed: {0}")]
    Connection(String),

    /// The catalog answered with an unexpected status or payload.
    #[error("postal catalog protocol error: {0}")]
    Protocol(String),
}

impl LocationError {
    /// Creates a not-found error for the given postal code.
    #[must_use]
    pub fn not_found(postal_code: &PostalCode) -> Self {
        Self::NotFound {
            postal_code: postal_code.as_str().to_string(),
        }
    }

    /// Returns true if the lookup failed because the code is unknown.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for postal catalog lookups.
pub type LocationResult<T> = Result<T, LocationError>;

/// Port for resolving postal codes into location data.
#[async_trait]
pub trait LocationProvider: Send + Sync + Debug {
    /// Resolves one postal code.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::NotFound`] for unknown codes and transport
    /// variants for catalog failures.
    async fn lookup(&self, postal_code: &PostalCode) -> LocationResult<ResolvedLocation>;
}

/// Wire shape of the catalog's lookup response.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    resultados: Vec<CatalogEntry>,
}

/// One settlement entry; the first entry of a response names the lane.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(default)]
    municipio: Option<String>,
    #[serde(default)]
    estado: Option<String>,
    #[serde(default)]
    ciudad: Option<String>,
    #[serde(default)]
    zona: Option<String>,
}

/// HTTP client for the postal catalog.
///
/// Authenticates with an `X-Api-Key` header and queries
/// `GET {base}/api/cp/{postal_code}`.
#[derive(Debug, Clone)]
pub struct PostalCatalogClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PostalCatalogClient {
    /// Creates a client from location settings.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::MissingApiKey`] when no API key is
    /// configured, or a protocol error if the client cannot be built.
    pub fn from_settings(settings: &LocationSettings) -> LocationResult<Self> {
        if settings.api_key.is_empty() {
            return Err(LocationError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()
            .map_err(|e| LocationError::Protocol(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    fn lookup_url(&self, postal_code: &PostalCode) -> String {
        format!("{}/api/cp/{}", self.base_url, postal_code.as_str())
    }
}

#[async_trait]
impl LocationProvider for PostalCatalogClient {
    async fn lookup(&self, postal_code: &PostalCode) -> LocationResult<ResolvedLocation> {
        tracing::debug!(postal_code = %postal_code, "resolving postal code");

        let response = self
            .client
            .get(self.lookup_url(postal_code))
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    LocationError::Connection(e.to_string())
                } else {
                    LocationError::Protocol(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LocationError::not_found(postal_code));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LocationError::Protocol(format!(
                "catalog answered {}: {}",
                status, body
            )));
        }

        let payload: CatalogResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Protocol(format!("failed to parse response: {}", e)))?;

        let entry = payload
            .resultados
            .into_iter()
            .next()
            .ok_or_else(|| LocationError::not_found(postal_code))?;

        Ok(ResolvedLocation {
            postal_code: postal_code.clone(),
            municipality: entry.municipio,
            state: entry.estado,
            city: entry.ciudad,
            zone: entry.zona,
        })
    }
}
