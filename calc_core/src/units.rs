//! # Unit Types
//!
//! Type-safe wrappers for the metric units used on site. These keep room
//! dimensions (meters), tile dimensions (centimeters) and joint or plaster
//! thicknesses (millimeters) from being mixed up inside a formula, while
//! serializing as plain numbers.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Centimeters, Meters, Millimeters};
//!
//! let room = Meters(4.0);
//! let room_cm: Centimeters = room.into();
//! assert_eq!(room_cm.0, 400.0);
//!
//! let joint: Centimeters = Millimeters(3.0).into();
//! assert!((joint.0 - 0.3).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Millimeters> for Centimeters {
    fn from(mm: Millimeters) -> Self {
        Centimeters(mm.0 / 10.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl Mul<Meters> for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> SquareMeters {
        SquareMeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Area and Volume
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Volume in cubic meters (sand is bought by the m³)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

// ============================================================================
// Mass and Liquid Volume
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Liquid volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(CubicMeters);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Liters);

/// Largest piece count reported. Counts stay exact both as `u64` and
/// when fed back into `f64` arithmetic.
pub const MAX_PIECES: u64 = 1 << 53;

/// Whole pieces needed to cover `total` with pieces of size `per_piece`.
///
/// Plain ceiling division on floats; no tolerance is applied, so an exact
/// multiple stays exact but a value a hair above rounds up. A count above
/// [`MAX_PIECES`] is reported against `field` as too large.
pub fn pieces_needed(field: &str, total: f64, per_piece: f64) -> CalcResult<u64> {
    let pieces = (total / per_piece).ceil();
    if !pieces.is_finite() || pieces > MAX_PIECES as f64 {
        return Err(CalcError::invalid_input(field, pieces.to_string(), "Value is too large"));
    }
    Ok(pieces.max(0.0) as u64)
}

/// Product of two piece counts, capped like [`pieces_needed`].
pub fn pieces_product(field: &str, a: u64, b: u64) -> CalcResult<u64> {
    match a.checked_mul(b) {
        Some(product) if product <= MAX_PIECES => Ok(product),
        _ => Err(CalcError::invalid_input(field, format!("{} x {}", a, b), "Value is too large")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_centimeters() {
        let cm: Centimeters = Meters(3.0).into();
        assert_eq!(cm.0, 300.0);
        let back: Meters = cm.into();
        assert_eq!(back.0, 3.0);
    }

    #[test]
    fn test_millimeters() {
        let cm: Centimeters = Millimeters(15.0).into();
        assert_eq!(cm.0, 1.5);
        let m: Meters = Millimeters(15.0).into();
        assert!((m.0 - 0.015).abs() < 1e-12);
    }

    #[test]
    fn test_area_from_lengths() {
        let area = Meters(4.0) * Meters(3.0);
        assert_eq!(area, SquareMeters(12.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Centimeters(40.0);
        let b = Centimeters(0.3);
        assert!(((a + b).0 - 40.3).abs() < 1e-12);
        assert_eq!((a - Centimeters(10.0)).0, 30.0);
        assert_eq!((Kilograms(6.24) * 2.0).0, 12.48);
        assert_eq!((Liters(24.0) / 10.0).0, 2.4);
    }

    #[test]
    fn test_pieces_needed() {
        assert_eq!(pieces_needed("tiles", 400.0, 40.3).unwrap(), 10);
        assert_eq!(pieces_needed("boxes", 80.0, 6.0).unwrap(), 14);
        assert_eq!(pieces_needed("boxes", 12.0, 6.0).unwrap(), 2);
    }

    #[test]
    fn test_piece_counts_too_large() {
        let err = pieces_needed("tiles", 1e300, 40.3).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(pieces_needed("tiles", f64::INFINITY, 40.3).is_err());
        assert!(pieces_needed("tiles", MAX_PIECES as f64, 1.0).is_ok());

        assert_eq!(pieces_product("tiles", 10, 8).unwrap(), 80);
        assert!(pieces_product("tiles", u64::MAX, 2).is_err());
        assert!(pieces_product("tiles", MAX_PIECES, 2).is_err());
    }

    #[test]
    fn test_serialization() {
        let m = Meters(12.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "12.5");
    }
}
