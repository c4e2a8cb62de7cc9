//! Fixed-point math for deterministic placement logic.
//!
//! All placement math uses fixed-point arithmetic so that the same
//! frame inputs always resolve to the same cell, independent of
//! platform floating-point behavior.

use fixed::types::I32F32;
use serde::{Deserialize, Serialize};

/// Fixed-point number type for all placement math.
///
/// Uses 32 bits for integer part and 32 bits for fractional part.
pub type Fixed = I32F32;

/// A planar world-space position on the placement field.
///
/// The field lies in the XZ plane; the vertical axis does not
/// participate in placement and is dropped at the raycast seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WorldPos {
    /// X coordinate in world units.
    #[serde(with = "fixed_serde")]
    pub x: Fixed,
    /// Z coordinate in world units.
    #[serde(with = "fixed_serde")]
    pub z: Fixed,
}

/// Serde support for fixed-point numbers.
///
/// Serializes fixed-point numbers as their raw bit representation (i64)
/// to preserve exact precision across serialization boundaries.
pub mod fixed_serde {
    use super::Fixed;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a fixed-point number as its raw bit representation.
    pub fn serialize<S>(value: &Fixed, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.to_bits().serialize(serializer)
    }

    /// Deserialize a fixed-point number from its raw bit representation.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Fixed, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = i64::deserialize(deserializer)?;
        Ok(Fixed::from_bits(bits))
    }
}

impl WorldPos {
    /// Create a new world position.
    #[must_use]
    pub const fn new(x: Fixed, z: Fixed) -> Self {
        Self { x, z }
    }

    /// World origin. Also the sentinel position used when the pointer
    /// ray hits nothing.
    pub const ZERO: Self = Self {
        x: Fixed::ZERO,
        z: Fixed::ZERO,
    };

    /// Create a world position from any numeric type the fixed-point
    /// representation can absorb (integers, floats in test setup).
    #[must_use]
    pub fn from_num<T: fixed::traits::ToFixed>(x: T, z: T) -> Self {
        Self {
            x: Fixed::from_num(x),
            z: Fixed::from_num(z),
        }
    }
}

impl std::ops::Add for WorldPos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            z: self.z + rhs.z,
        }
    }
}

impl std::ops::Sub for WorldPos {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            z: self.z - rhs.z,
        }
    }
}
