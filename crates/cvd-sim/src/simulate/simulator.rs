//! Matrix simulation blended by intensity.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::api::SimError;
use crate::color::{Rgb, Rgba};

use super::deficiency::{DeficiencyType, Matrix3};

/// Blend factor between the original color (0) and the full simulation (100).
///
/// # Example
///
/// ```
/// use cvd_sim::Intensity;
///
/// let half = Intensity::new(50).unwrap();
/// assert_eq!(half.factor(), 0.5);
/// assert!(Intensity::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Intensity(u8);

impl Intensity {
    pub const ZERO: Intensity = Intensity(0);
    pub const FULL: Intensity = Intensity(100);

    /// Create an intensity, rejecting values above 100.
    pub fn new(percent: u8) -> Result<Self, SimError> {
        if percent > 100 {
            return Err(SimError::IntensityOutOfRange(percent));
        }
        Ok(Self(percent))
    }

    #[inline]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// `percent / 100` as a float.
    #[inline]
    pub fn factor(self) -> f32 {
        self.0 as f32 / 100.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<u8> for Intensity {
    type Error = SimError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.0
    }
}

/// `M · [r, g, b]ᵀ`, unclamped.
#[inline]
pub fn apply_matrix(matrix: &Matrix3, rgb: Rgb) -> Rgb {
    let m = matrix;
    Rgb::new(
        m[0][0] * rgb.r + m[0][1] * rgb.g + m[0][2] * rgb.b,
        m[1][0] * rgb.r + m[1][1] * rgb.g + m[1][2] * rgb.b,
        m[2][0] * rgb.r + m[2][1] * rgb.g + m[2][2] * rgb.b,
    )
}

/// Simulate a deficiency on floating point channels, without clamping.
///
/// `c' = c + (M·c − c) · intensity/100`. At full intensity the matrix
/// product is returned as is.
pub fn simulate_rgb(rgb: Rgb, deficiency: DeficiencyType, intensity: Intensity) -> Rgb {
    if deficiency == DeficiencyType::None || intensity == Intensity::ZERO {
        return rgb;
    }

    let simulated = apply_matrix(deficiency.matrix(), rgb);
    if intensity == Intensity::FULL {
        return simulated;
    }

    let t = intensity.factor();
    Rgb::new(
        rgb.r + (simulated.r - rgb.r) * t,
        rgb.g + (simulated.g - rgb.g) * t,
        rgb.b + (simulated.b - rgb.b) * t,
    )
}

/// Simulate a deficiency on one pixel.
///
/// The blended result is clamped to 0..=255 and rounded; alpha is kept.
///
/// # Example
///
/// ```
/// use cvd_sim::{simulate, DeficiencyType, Intensity, Rgba};
///
/// let out = simulate(Rgba::opaque(255, 0, 0), DeficiencyType::Protanopia, Intensity::FULL);
/// assert_eq!(out, Rgba::opaque(145, 142, 0));
/// ```
#[inline]
pub fn simulate(pixel: Rgba, deficiency: DeficiencyType, intensity: Intensity) -> Rgba {
    if deficiency == DeficiencyType::None || intensity == Intensity::ZERO {
        return pixel;
    }
    pixel.with_rgb(simulate_rgb(Rgb::from(pixel), deficiency, intensity).clamped())
}
