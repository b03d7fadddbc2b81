//! # Carrier Rate Gateway
//!
//! Retrieval of raw tariff documents from the external carrier rate
//! service.
//!
//! - [`error`]: carrier error taxonomy
//! - [`types`]: raw tariff document wire types
//! - [`http`]: the rates HTTP client (Basic Auth, version header)
//! - [`gateway`]: the [`RateGateway`](gateway::RateGateway) port and its
//!   DHL-style implementation
//!
//! One outbound call per quote request, bounded timeout, no retries: a
//! failure fails the whole quote.

pub mod error;
pub mod gateway;
pub mod http;
pub mod types;

pub use error::{CarrierError, CarrierResult};
pub use gateway::{DhlRateGateway, RateGateway, RateRequest};
pub use types::RateDocument;
