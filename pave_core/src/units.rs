//! # Unit Types
//!
//! Type-safe wrappers for the units that appear in pavement design. These
//! provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Mixed Units
//!
//! The AASHTO 1993 equations are written in US customary units, while layer
//! thicknesses and material moduli are commonly specified in SI:
//! - Thickness: centimeters (input), inches (equation)
//! - Modulus: psi (equation), MPa (reporting)
//!
//! ## Example
//!
//! ```rust
//! use pave_core::units::{Centimeters, Inches};
//!
//! let layer = Centimeters(25.4);
//! let layer_in: Inches = layer.into();
//! assert!((layer_in.0 - 10.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// MPa per psi (value used by the AASHTO design charts)
pub const MPA_PER_PSI: f64 = 0.006895;

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Centimeters> for Inches {
    fn from(cm: Centimeters) -> Self {
        Inches(cm.0 / CM_PER_INCH)
    }
}

impl From<Inches> for Centimeters {
    fn from(inches: Inches) -> Self {
        Centimeters(inches.0 * CM_PER_INCH)
    }
}

// ============================================================================
// Modulus Units
// ============================================================================

/// Modulus in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Modulus in megapascals (MPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

impl From<Psi> for Mpa {
    fn from(psi: Psi) -> Self {
        Mpa(psi.0 * MPA_PER_PSI)
    }
}

impl From<Mpa> for Psi {
    fn from(mpa: Mpa) -> Self {
        Psi(mpa.0 / MPA_PER_PSI)
    }
}

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

impl_arithmetic!(Centimeters);
impl_arithmetic!(Inches);
impl_arithmetic!(Psi);
impl_arithmetic!(Mpa);

/// Round to a fixed number of decimal places for display.
///
/// Results keep full precision internally; this is only applied to the
/// reported fields.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_to_inches() {
        let cm = Centimeters(2.54);
        let inches: Inches = cm.into();
        assert_eq!(inches.0, 1.0);
    }

    #[test]
    fn test_psi_to_mpa() {
        let mpa: Mpa = Psi(5000.0).into();
        assert!((mpa.0 - 34.475).abs() < 1e-9);

        let back: Psi = mpa.into();
        assert!((back.0 - 5000.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Centimeters(10.0);
        let b = Centimeters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(5.136725979, 3), 5.137);
        assert_eq!(round_to(-0.9438, 3), -0.944);
    }

    #[test]
    fn test_serialization() {
        let cm = Centimeters(12.5);
        let json = serde_json::to_string(&cm).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Centimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(cm, roundtrip);
    }
}
