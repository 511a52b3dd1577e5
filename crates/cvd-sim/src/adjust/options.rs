//! Channel adjustment parameters.
//!
//! This module provides [`ChannelAdjustment`], the set of slider values
//! applied to every pixel before deficiency simulation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::api::SimError;

/// Additive RGB offsets, each in -100..=100.
///
/// An offset of 100 adds 255 to the channel (the value is scaled by 2.55).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RgbOffset {
    pub r: i16,
    pub g: i16,
    pub b: i16,
}

/// HSV rotation and shifts.
///
/// - `h`: hue rotation in degrees, -180..=180
/// - `s`: saturation shift in percentage points, -100..=100
/// - `v`: value shift in percentage points, -100..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HsvShift {
    pub h: i16,
    pub s: i16,
    pub v: i16,
}

impl HsvShift {
    /// True when any component is non-zero.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.h != 0 || self.s != 0 || self.v != 0
    }
}

/// CIE L\*a\*b\* shifts.
///
/// - `l`: lightness shift, -100..=100
/// - `a`: green-red shift, -128..=128
/// - `b`: blue-yellow shift, -128..=128
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabShift {
    pub l: i16,
    pub a: i16,
    pub b: i16,
}

impl LabShift {
    /// True when any component is non-zero.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.l != 0 || self.a != 0 || self.b != 0
    }
}

/// Manual color adjustment applied before deficiency simulation.
///
/// The all-zero value ([`ChannelAdjustment::identity()`], also the
/// `Default`) leaves every pixel exactly as it was.
///
/// # Example
///
/// ```
/// use cvd_sim::ChannelAdjustment;
///
/// let adjustment = ChannelAdjustment::new()
///     .rgb(10, 0, -10)
///     .hsv(30, 0, 0)
///     .lab(0, 0, 20);
///
/// assert!(adjustment.validate().is_ok());
/// assert!(!adjustment.is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChannelAdjustment {
    pub rgb: RgbOffset,
    pub hsv: HsvShift,
    pub lab: LabShift,
}

impl ChannelAdjustment {
    pub const RGB_RANGE: (i16, i16) = (-100, 100);
    pub const HUE_RANGE: (i16, i16) = (-180, 180);
    pub const PERCENT_RANGE: (i16, i16) = (-100, 100);
    pub const LAB_AB_RANGE: (i16, i16) = (-128, 128);

    /// Create an identity adjustment.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The all-zero adjustment.
    #[inline]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Set RGB offsets.
    #[inline]
    pub fn rgb(mut self, r: i16, g: i16, b: i16) -> Self {
        self.rgb = RgbOffset { r, g, b };
        self
    }

    /// Set HSV hue rotation and saturation/value shifts.
    #[inline]
    pub fn hsv(mut self, h: i16, s: i16, v: i16) -> Self {
        self.hsv = HsvShift { h, s, v };
        self
    }

    /// Set LAB shifts.
    #[inline]
    pub fn lab(mut self, l: i16, a: i16, b: i16) -> Self {
        self.lab = LabShift { l, a, b };
        self
    }

    /// True when every field is zero.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Check every field against its slider range.
    ///
    /// Reports the first offending field.
    pub fn validate(&self) -> Result<(), SimError> {
        let checks = [
            ("rgb.r", self.rgb.r, Self::RGB_RANGE),
            ("rgb.g", self.rgb.g, Self::RGB_RANGE),
            ("rgb.b", self.rgb.b, Self::RGB_RANGE),
            ("hsv.h", self.hsv.h, Self::HUE_RANGE),
            ("hsv.s", self.hsv.s, Self::PERCENT_RANGE),
            ("hsv.v", self.hsv.v, Self::PERCENT_RANGE),
            ("lab.l", self.lab.l, Self::PERCENT_RANGE),
            ("lab.a", self.lab.a, Self::LAB_AB_RANGE),
            ("lab.b", self.lab.b, Self::LAB_AB_RANGE),
        ];

        for (field, value, (min, max)) in checks {
            if value < min || value > max {
                return Err(SimError::AdjustmentOutOfRange {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}
