//! # Domain Layer
//!
//! Core business types and pure domain logic for shipment quoting.
//!
//! Contains no I/O: everything here is deterministic and directly testable.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
