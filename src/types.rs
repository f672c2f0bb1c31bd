//! Core actor types shared across all modules.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Basic math
// ---------------------------------------------------------------------------

/// A validated float triple (location, rotation or scale).
///
/// Serialised as a 3-element JSON array, which is what the engine expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Geometry fields
// ---------------------------------------------------------------------------

/// The three transform components an actor command may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryField {
    Location,
    Rotation,
    Scale,
}

impl GeometryField {
    pub const ALL: [GeometryField; 3] = [Self::Location, Self::Rotation, Self::Scale];

    /// Parameter key used on the wire.
    pub fn key(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Rotation => "rotation",
            Self::Scale => "scale",
        }
    }

    /// Value substituted when creating an actor without this field.
    pub fn default_value(self) -> Vec3 {
        match self {
            Self::Location | Self::Rotation => Vec3::zero(),
            Self::Scale => Vec3::one(),
        }
    }
}

impl std::fmt::Display for GeometryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
