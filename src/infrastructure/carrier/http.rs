//! # Rates HTTP Client
//!
//! Thin HTTP wrapper for the carrier rate service.
//!
//! The client carries the concerns every rate call shares:
//! - Basic Auth credentials
//! - the `x-version` API version header
//! - a bounded request timeout
//! - status-code and transport error mapping into [`CarrierError`]

use crate::infrastructure::carrier::error::{CarrierError, CarrierResult};
use crate::infrastructure::config::CarrierSettings;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for the carrier rate service.
///
/// Authenticates every request with Basic Auth and declares the API
/// version through the `x-version` header.
#[derive(Debug, Clone)]
pub struct RatesHttpClient {
    client: Client,
    username: String,
    password: String,
    timeout_ms: u64,
}

impl RatesHttpClient {
    /// Creates a client from carrier settings.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::Authentication`] when the Basic Auth
    /// credentials are missing, or [`CarrierError::Internal`] if the
    /// underlying client cannot be constructed.
    pub fn from_settings(settings: &CarrierSettings) -> CarrierResult<Self> {
        if !settings.has_credentials() {
            return Err(CarrierError::authentication(
                "carrier credentials are not configured",
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let version = HeaderValue::from_str(&settings.api_version).map_err(|e| {
            CarrierError::internal(format!("invalid api version header value: {}", e))
        })?;
        headers.insert("x-version", version);

        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| CarrierError::internal(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            username: settings.username.clone(),
            password: settings.password.clone(),
            timeout_ms: settings.timeout_ms,
        })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes an authenticated GET request with query parameters and
    /// deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`] describing the transport failure or the
    /// non-success status the carrier answered with.
    pub async fn get_with_params<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> CarrierResult<T> {
        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }
}

/// Checks the status and deserializes a JSON body.
async fn handle_response<T: DeserializeOwned>(response: Response) -> CarrierResult<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| CarrierError::protocol(format!("failed to parse response: {}", e)))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(map_status_error(status, body))
    }
}

fn map_reqwest_error(error: reqwest::Error) -> CarrierError {
    if error.is_timeout() {
        CarrierError::timeout("request timed out")
    } else if error.is_connect() {
        CarrierError::connection(format!("connection failed: {}", error))
    } else {
        CarrierError::connection(format!("HTTP request failed: {}", error))
    }
}

fn map_status_error(status: StatusCode, body: String) -> CarrierError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CarrierError::authentication(format!("authentication failed: {}", body))
        }
        StatusCode::BAD_REQUEST => CarrierError::InvalidRequest(body),
        _ if status.is_server_error() => CarrierError::Upstream {
            status: status.as_u16(),
            body,
        },
        _ => CarrierError::protocol(format!("HTTP error ({}): {}", status, body)),
    }
}
