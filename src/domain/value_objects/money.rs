//! # Money Arithmetic
//!
//! Ceiling rounding policy and checked decimal arithmetic.
//!
//! Every monetary value surfaced to a caller is an integer obtained by
//! rounding the computed fractional amount up; intermediate fractional
//! values are never exposed. [`ceil_to_unit`] is the single place where
//! that conversion happens.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::value_objects::money::ceil_to_unit;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(ceil_to_unit(Decimal::new(1204, 1)).unwrap(), 121); // 120.4
//! assert_eq!(ceil_to_unit(Decimal::new(135, 0)).unwrap(), 135);  // already whole
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Error type for monetary arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// The rounded amount does not fit an integer unit.
    #[error("amount out of range for integer units")]
    OutOfRange,
}

/// Result type for monetary arithmetic.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Rounds a fractional amount up to the nearest integer unit.
///
/// Idempotent on integers: rounding up an already-whole amount yields the
/// same amount.
///
/// # Errors
///
/// Returns [`ArithmeticError::OutOfRange`] if the ceiling does not fit in
/// an `i64`.
#[inline]
pub fn ceil_to_unit(amount: Decimal) -> ArithmeticResult<i64> {
    amount.ceil().to_i64().ok_or(ArithmeticError::OutOfRange)
}

/// Trait for checked decimal arithmetic.
///
/// All pricing math goes through these methods so that overflow surfaces
/// as an error instead of a panic.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ceil_rounds_fractions_up() {
        assert_eq!(ceil_to_unit(Decimal::new(1001, 2)).unwrap(), 11); // 10.01
        assert_eq!(ceil_to_unit(Decimal::new(450, 1)).unwrap(), 45); // 45.0
        assert_eq!(ceil_to_unit(Decimal::new(1, 3)).unwrap(), 1); // 0.001
    }

    #[test]
    fn ceil_is_idempotent_on_integers() {
        for n in [0i64, 1, 135, 999_999] {
            let once = ceil_to_unit(Decimal::from(n)).unwrap();
            let twice = ceil_to_unit(Decimal::from(once)).unwrap();
            assert_eq!(once, n);
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn safe_mul_overflow_fails() {
        let result = Decimal::MAX.safe_mul(Decimal::TWO);
        assert_eq!(result, Err(ArithmeticError::Overflow));
    }

    #[test]
    fn safe_add_works() {
        let a = Decimal::new(1204, 1);
        let b = Decimal::new(450, 1);
        assert_eq!(a.safe_add(b).unwrap(), Decimal::new(1654, 1));
    }

    proptest! {
        #[test]
        fn ceil_never_below_raw(cents in 0i64..1_000_000_000) {
            let raw = Decimal::new(cents, 2);
            let rounded = ceil_to_unit(raw).unwrap();
            prop_assert!(Decimal::from(rounded) >= raw);
            prop_assert!(Decimal::from(rounded) - raw < Decimal::ONE);
        }

        #[test]
        fn ceil_idempotent(units in 0i64..1_000_000_000) {
            let once = ceil_to_unit(Decimal::from(units)).unwrap();
            prop_assert_eq!(once, units);
        }
    }
}
