//! # Quote Errors
//!
//! The application-level error taxonomy for quote requests.
//!
//! Infrastructure failures are folded into this taxonomy at the layer
//! boundary: carrier credential rejections become
//! [`QuoteError::InvalidCredentials`], unknown postal codes become
//! [`QuoteError::LocationNotFound`], and so on. Callers can distinguish
//! caller mistakes from system faults with [`QuoteError::is_client_error`].

use crate::domain::entities::NormalizedQuoteOption;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::role::AccountRole;
use crate::infrastructure::carrier::CarrierError;
use crate::infrastructure::location::LocationError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Error type for quote requests.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The caller's input failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A postal code has no catalog entry.
    #[error("postal code {postal_code} not found")]
    LocationNotFound {
        /// The postal code that failed to resolve.
        postal_code: String,
    },

    /// The postal catalog failed for a reason other than an unknown code.
    #[error("location service unavailable: {0}")]
    LocationUnavailable(String),

    /// The carrier rejected the configured credentials.
    #[error("carrier credentials rejected: {0}")]
    InvalidCredentials(String),

    /// The carrier could not be reached or answered unusably.
    #[error("carrier unavailable: {0}")]
    CarrierUnavailable(String),

    /// The role has no pricing configuration covering the billed weight.
    #[error("no pricing rule for role {role} at {billed_weight_kg} kg")]
    NoPricingRule {
        /// The caller's role.
        role: AccountRole,
        /// The billed weight that no band covers.
        billed_weight_kg: u32,
    },

    /// A credit-based caller has no usable credit blocks.
    ///
    /// The normalized carrier options are carried so the caller can still
    /// present delivery estimates alongside the refusal.
    #[error("no credits available")]
    NoCreditsAvailable {
        /// Normalized options for the requested lane.
        options: Vec<NormalizedQuoteOption>,
    },

    /// The carrier answered, but no allowed option survived
    /// normalization and pricing.
    #[error("no valid quote options")]
    NoValidOptions,

    /// A pricing or credit store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Unclassified internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl QuoteError {
    /// Returns true if the failure is attributable to the caller's input
    /// or account state rather than to the system.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::LocationNotFound { .. }
                | Self::NoPricingRule { .. }
                | Self::NoCreditsAvailable { .. }
                | Self::NoValidOptions
        )
    }
}

impl From<DomainError> for QuoteError {
    fn from(error: DomainError) -> Self {
        Self::Validation(error.to_string())
    }
}

impl From<CarrierError> for QuoteError {
    fn from(error: CarrierError) -> Self {
        if error.is_authentication() {
            Self::InvalidCredentials(error.to_string())
        } else {
            Self::CarrierUnavailable(error.to_string())
        }
    }
}

impl From<LocationError> for QuoteError {
    fn from(error: LocationError) -> Self {
        match error {
            LocationError::NotFound { postal_code } => Self::LocationNotFound { postal_code },
            other => Self::LocationUnavailable(other.to_string()),
        }
    }
}

/// Result type for quote requests.
pub type QuoteResult<T> = Result<T, QuoteError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn carrier_authentication_maps_to_invalid_credentials() {
        let err: QuoteError = CarrierError::authentication("401").into();
        assert!(matches!(err, QuoteError::InvalidCredentials(_)));

        let err: QuoteError = CarrierError::timeout("15s").into();
        assert!(matches!(err, QuoteError::CarrierUnavailable(_)));
    }

    #[test]
    fn unknown_postal_code_maps_to_location_not_found() {
        let err: QuoteError = LocationError::NotFound {
            postal_code: "99999".to_string(),
        }
        .into();
        match err {
            QuoteError::LocationNotFound { postal_code } => assert_eq!(postal_code, "99999"),
            other => panic!("unexpected error: {:?}", other),
        }

        let err: QuoteError = LocationError::Connection("refused".to_string()).into();
        assert!(matches!(err, QuoteError::LocationUnavailable(_)));
    }

    #[test]
    fn domain_errors_map_to_validation() {
        let err: QuoteError = DomainError::field("weight", "must be positive").into();
        assert!(matches!(err, QuoteError::Validation(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn client_error_classification() {
        assert!(QuoteError::NoValidOptions.is_client_error());
        assert!(
            QuoteError::NoCreditsAvailable { options: vec![] }.is_client_error()
        );
        assert!(!QuoteError::CarrierUnavailable("down".to_string()).is_client_error());
        assert!(!QuoteError::InvalidCredentials("bad".to_string()).is_client_error());
    }
}
