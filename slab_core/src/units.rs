//! # Unit Types
//!
//! Type-safe wrappers for the SI units the engine works in. They are plain
//! `f64` newtypes that serialize as bare numbers, used where a value crosses
//! a unit boundary (strip dimensions entered in millimeters, stresses reported
//! in megapascals).
//!
//! ## SI Units
//!
//! - Length: meters (m), millimeters (mm)
//! - Stress / modulus: pascals (Pa), megapascals (MPa)
//!
//! ## Example
//!
//! ```rust
//! use slab_core::units::{Meters, Millimeters};
//!
//! let strip = Millimeters(100.0);
//! let strip_m: Meters = strip.into();
//! assert_eq!(strip_m.0, 0.1);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress or elastic modulus in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / 1e6)
    }
}

// ============================================================================
// Raw Access
// ============================================================================

macro_rules! impl_value {
    ($($type:ty),*) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )*
    };
}

impl_value!(Meters, Millimeters, Megapascals);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeters_to_meters() {
        let m: Meters = Millimeters(400.0).into();
        assert_eq!(m.0, 0.4);
        let back: Millimeters = m.into();
        assert_eq!(back.0, 400.0);
    }

    #[test]
    fn test_pascals_to_megapascals() {
        let mpa: Megapascals = Pascals(2.5e6).into();
        assert_eq!(mpa.0, 2.5);
    }

    #[test]
    fn test_serialization() {
        let width = Millimeters(150.0);
        let json = serde_json::to_string(&width).unwrap();
        assert_eq!(json, "150.0");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(width, roundtrip);
    }
}
