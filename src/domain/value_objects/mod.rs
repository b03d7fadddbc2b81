//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Shipment Types
//!
//! - [`PostalCode`]: 5-digit numeric postal code
//! - [`ShipmentDimensions`], [`BilledDimensions`]: raw and billed
//!   weight/size, including the volumetric-weight rule
//!
//! ## Quote Types
//!
//! - [`ProductCode`]: carrier service tiers this system is willing to quote
//! - [`AccountRole`], [`RoleCategory`]: caller roles and their pricing
//!   dispatch category
//!
//! ## Money
//!
//! - [`money`]: ceiling rounding policy and checked decimal arithmetic

pub mod dimensions;
pub mod money;
pub mod postal_code;
pub mod product_code;
pub mod role;

pub use dimensions::{BilledDimensions, ShipmentDimensions};
pub use postal_code::PostalCode;
pub use product_code::ProductCode;
pub use role::{AccountRole, RoleCategory};
