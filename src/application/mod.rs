//! # Application Layer
//!
//! Quote orchestration: the pipeline services and the application error
//! taxonomy.

pub mod error;
pub mod services;

pub use error::{QuoteError, QuoteResult};
pub use services::quote_engine::QuoteEngine;
