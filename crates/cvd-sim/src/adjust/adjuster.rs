//! Per-pixel channel adjustment.
//!
//! The stage order is fixed:
//!
//! 1. **RGB offset** - `c + offset * 2.55`, clamped to 0..=255
//! 2. **HSV** - hue rotation with wraparound, saturation/value shift with
//!    clamping, back to whole RGB channels; skipped entirely when all three
//!    shifts are zero
//! 3. **LAB** - lightness shift with clamping, unclamped a/b shift, back to
//!    whole RGB channels; skipped entirely when all three shifts are zero
//!
//! The skips are required for correctness: running an unmodified pixel
//! through RGB→HSV→RGB or RGB→LAB→RGB can move it by one code value.

use crate::color::{Hsv, Lab, Rgb, Rgba};

use super::options::ChannelAdjustment;

/// Scale from the -100..=100 offset slider to 8-bit channel units.
const RGB_OFFSET_SCALE: f32 = 2.55;

/// Applies a [`ChannelAdjustment`] to pixels.
///
/// Stateless apart from the adjustment snapshot; `Copy`, so each worker can
/// hold its own.
///
/// # Example
///
/// ```
/// use cvd_sim::{ChannelAdjuster, ChannelAdjustment, Rgba};
///
/// let adjuster = ChannelAdjuster::new(ChannelAdjustment::new().rgb(100, 0, 0));
/// let out = adjuster.adjust(Rgba::new(0, 10, 20, 128));
/// assert_eq!(out, Rgba::new(255, 10, 20, 128));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelAdjuster {
    adjustment: ChannelAdjustment,
}

impl ChannelAdjuster {
    #[inline]
    pub fn new(adjustment: ChannelAdjustment) -> Self {
        Self { adjustment }
    }

    /// The adjustment this adjuster applies.
    #[inline]
    pub fn adjustment(&self) -> &ChannelAdjustment {
        &self.adjustment
    }

    /// Adjust one pixel. Alpha is copied through.
    #[inline]
    pub fn adjust(&self, pixel: Rgba) -> Rgba {
        if self.adjustment.is_identity() {
            return pixel;
        }
        pixel.with_rgb(self.adjust_rgb(Rgb::from(pixel)))
    }

    /// Run the full stage chain on floating point channels without the
    /// final rounding.
    ///
    /// The RGB stage output is fractional and is what the analysis pass
    /// measures when no colour-space stage runs. The HSV and LAB stages
    /// return whole channel values.
    pub fn adjust_rgb(&self, rgb: Rgb) -> Rgb {
        let adj = &self.adjustment;

        let mut rgb = Rgb::new(
            (rgb.r + adj.rgb.r as f32 * RGB_OFFSET_SCALE).clamp(0.0, 255.0),
            (rgb.g + adj.rgb.g as f32 * RGB_OFFSET_SCALE).clamp(0.0, 255.0),
            (rgb.b + adj.rgb.b as f32 * RGB_OFFSET_SCALE).clamp(0.0, 255.0),
        );

        if adj.hsv.is_active() {
            let hsv = Hsv::from(rgb);
            let shifted = Hsv::new(
                (hsv.h + adj.hsv.h as f32 + 360.0).rem_euclid(360.0),
                (hsv.s + adj.hsv.s as f32).clamp(0.0, 100.0),
                (hsv.v + adj.hsv.v as f32).clamp(0.0, 100.0),
            );
            rgb = Rgb::from(shifted);
        }

        if adj.lab.is_active() {
            let lab = Lab::from(rgb);
            let shifted = Lab::new(
                (lab.l + adj.lab.l as f32).clamp(0.0, 100.0),
                lab.a + adj.lab.a as f32,
                lab.b + adj.lab.b as f32,
            );
            rgb = Rgb::from(shifted);
        }

        debug_assert!(rgb.is_finite(), "adjust_rgb produced non-finite {rgb:?}");
        rgb
    }
}
