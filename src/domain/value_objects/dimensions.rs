//! # Shipment Dimensions
//!
//! Weight resolution: raw physical measurements to billed weight.
//!
//! The billed weight is the greater of the (rounded-up) physical weight
//! and the volumetric weight `ceil(L × W × H / 5000)` computed from the
//! rounded-up dimensions. Volumetric weight can only raise, never lower,
//! the billed weight. Both the carrier rate request and rule selection use
//! the billed weight.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::value_objects::dimensions::ShipmentDimensions;
//! use rust_decimal::Decimal;
//!
//! // 1 kg parcel, 30×30×30 cm: volumetric ceil(27000/5000) = 6 wins.
//! let dims = ShipmentDimensions::new(
//!     Decimal::ONE,
//!     Decimal::from(30),
//!     Decimal::from(30),
//!     Decimal::from(30),
//! ).unwrap();
//! let billed = dims.resolve().unwrap();
//! assert_eq!(billed.volumetric_weight_kg(), 6);
//! assert_eq!(billed.billed_weight_kg(), 6);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Divisor of the volumetric-weight formula (cm³ per kg).
pub const VOLUMETRIC_DIVISOR: u64 = 5000;

/// Raw shipment measurements as supplied by the caller.
///
/// Weight in kilograms, dimensions in centimeters. Every component must
/// be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentDimensions {
    weight: Decimal,
    length: Decimal,
    width: Decimal,
    height: Decimal,
}

impl ShipmentDimensions {
    /// Validates raw measurements.
    ///
    /// # Errors
    ///
    /// Returns a field-scoped validation error for any non-positive
    /// component.
    pub fn new(
        weight: Decimal,
        length: Decimal,
        width: Decimal,
        height: Decimal,
    ) -> DomainResult<Self> {
        for (field, value) in [
            ("weight", weight),
            ("length", length),
            ("width", width),
            ("height", height),
        ] {
            if value <= Decimal::ZERO {
                return Err(DomainError::field(field, "must be a number greater than 0"));
            }
        }
        Ok(Self {
            weight,
            length,
            width,
            height,
        })
    }

    /// Returns the raw weight in kilograms.
    #[must_use]
    pub fn weight(&self) -> Decimal {
        self.weight
    }

    /// Resolves the billed dimensions: rounds every component up and
    /// derives volumetric and billed weight.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a rounded component does not fit the
    /// integer range the carrier accepts.
    pub fn resolve(&self) -> DomainResult<BilledDimensions> {
        let weight_kg = ceil_component("weight", self.weight)?;
        let length_cm = ceil_component("length", self.length)?;
        let width_cm = ceil_component("width", self.width)?;
        let height_cm = ceil_component("height", self.height)?;

        let volume = u64::from(length_cm) * u64::from(width_cm) * u64::from(height_cm);
        let volumetric = volume.div_ceil(VOLUMETRIC_DIVISOR);
        let volumetric_weight_kg = u32::try_from(volumetric)
            .map_err(|_| DomainError::validation("volumetric weight out of range"))?;

        Ok(BilledDimensions {
            weight_kg,
            length_cm,
            width_cm,
            height_cm,
            volumetric_weight_kg,
            billed_weight_kg: weight_kg.max(volumetric_weight_kg),
        })
    }
}

fn ceil_component(field: &'static str, value: Decimal) -> DomainResult<u32> {
    value
        .ceil()
        .to_u32()
        .ok_or_else(|| DomainError::field(field, "out of range after rounding up"))
}

/// Normalized shipment physical data.
///
/// All components are rounded up to whole units; immutable once derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilledDimensions {
    weight_kg: u32,
    length_cm: u32,
    width_cm: u32,
    height_cm: u32,
    volumetric_weight_kg: u32,
    billed_weight_kg: u32,
}

impl BilledDimensions {
    /// Physical weight, rounded up, in kilograms.
    #[must_use]
    pub fn weight_kg(&self) -> u32 {
        self.weight_kg
    }

    /// Length, rounded up, in centimeters.
    #[must_use]
    pub fn length_cm(&self) -> u32 {
        self.length_cm
    }

    /// Width, rounded up, in centimeters.
    #[must_use]
    pub fn width_cm(&self) -> u32 {
        self.width_cm
    }

    /// Height, rounded up, in centimeters.
    #[must_use]
    pub fn height_cm(&self) -> u32 {
        self.height_cm
    }

    /// Volumetric weight `ceil(L × W × H / 5000)` in kilograms.
    #[must_use]
    pub fn volumetric_weight_kg(&self) -> u32 {
        self.volumetric_weight_kg
    }

    /// Billed weight: the greater of physical and volumetric weight.
    ///
    /// Used for rule selection and as the declared weight on the carrier
    /// request.
    #[must_use]
    pub fn billed_weight_kg(&self) -> u32 {
        self.billed_weight_kg
    }
}
