//! # Carrier Errors
//!
//! Error type for the carrier rate service adapter.
//!
//! Authentication failures are kept distinct from generic carrier errors
//! for diagnostics, but both are fatal to the quote request.

use thiserror::Error;

/// Error type for carrier gateway operations.
#[derive(Debug, Clone, Error)]
pub enum CarrierError {
    /// The carrier rejected the configured credentials (HTTP 401/403).
    #[error("carrier authentication failed: {0}")]
    Authentication(String),

    /// The carrier could not be reached.
    #[error("carrier connection failed: {0}")]
    Connection(String),

    /// The request exceeded the configured timeout.
    #[error("carrier request timed out: {0}")]
    Timeout(String),

    /// The carrier rejected the request as malformed (HTTP 400).
    #[error("carrier rejected request: {0}")]
    InvalidRequest(String),

    /// The carrier answered with an unexpected payload or status.
    #[error("carrier protocol error: {0}")]
    Protocol(String),

    /// The carrier answered with a server-side error status.
    #[error("carrier upstream error ({status}): {body}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Raw error payload.
        body: String,
    },

    /// Adapter-internal failure (client construction, configuration).
    #[error("carrier adapter error: {0}")]
    Internal(String),
}

impl CarrierError {
    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    /// Creates an internal adapter error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this failure is a credentials problem.
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }
}

/// Result type for carrier gateway operations.
pub type CarrierResult<T> = Result<T, CarrierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_is_flagged() {
        assert!(CarrierError::authentication("bad password").is_authentication());
        assert!(!CarrierError::timeout("15s elapsed").is_authentication());
    }

    #[test]
    fn upstream_display_includes_status() {
        let err = CarrierError::Upstream {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("maintenance"));
    }
}
