//! Deficiency types and their transform matrices.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::api::SimError;

/// A 3×3 row-major matrix applied to `[R, G, B]ᵀ`.
pub type Matrix3 = [[f32; 3]; 3];

const IDENTITY: Matrix3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Missing long-wavelength (red) cones.
const PROTANOPIA: Matrix3 = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];

/// Missing medium-wavelength (green) cones.
const DEUTERANOPIA: Matrix3 = [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]];

/// Missing short-wavelength (blue) cones.
const TRITANOPIA: Matrix3 = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];

/// Simulated color-vision deficiency.
///
/// Parsed from and displayed as lower-case names:
///
/// ```
/// use cvd_sim::DeficiencyType;
///
/// let kind: DeficiencyType = "Deuteranopia".parse().unwrap();
/// assert_eq!(kind, DeficiencyType::Deuteranopia);
/// assert_eq!(kind.to_string(), "deuteranopia");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeficiencyType {
    /// No simulation, pixels pass through
    #[default]
    None,
    Protanopia,
    Deuteranopia,
    Tritanopia,
}

impl DeficiencyType {
    /// Every variant, `None` first. Used for side-by-side grid rendering.
    pub const ALL: [DeficiencyType; 4] = [
        DeficiencyType::None,
        DeficiencyType::Protanopia,
        DeficiencyType::Deuteranopia,
        DeficiencyType::Tritanopia,
    ];

    /// The transform matrix for this deficiency (identity for `None`).
    #[inline]
    pub const fn matrix(self) -> &'static Matrix3 {
        match self {
            DeficiencyType::None => &IDENTITY,
            DeficiencyType::Protanopia => &PROTANOPIA,
            DeficiencyType::Deuteranopia => &DEUTERANOPIA,
            DeficiencyType::Tritanopia => &TRITANOPIA,
        }
    }

    /// Lower-case identifier.
    pub const fn name(self) -> &'static str {
        match self {
            DeficiencyType::None => "none",
            DeficiencyType::Protanopia => "protanopia",
            DeficiencyType::Deuteranopia => "deuteranopia",
            DeficiencyType::Tritanopia => "tritanopia",
        }
    }
}

impl fmt::Display for DeficiencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeficiencyType {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DeficiencyType::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SimError::UnknownDeficiency(s.to_string()))
    }
}
