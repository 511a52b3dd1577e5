//! RGB pixel types
//!
//! [`Rgba`] is the 8-bit storage pixel found in raster buffers. [`Rgb`] holds
//! the same color on a floating point 0.0..=255.0 scale; the RGB offset
//! stage produces fractional channels in it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Round and clamp a floating point channel to the 0..=255 byte range.
///
/// NaN is a logic error upstream and is caught in debug builds; release
/// builds map it to 0 rather than producing garbage.
#[inline]
pub fn to_u8_channel(value: f32) -> u8 {
    debug_assert!(!value.is_nan(), "to_u8_channel: NaN channel value");
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// An 8-bit RGBA pixel.
///
/// Alpha is carried along untouched by every transform in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0..=255), never modified
    pub a: u8,
}

impl Rgba {
    /// Create a new pixel.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque pixel.
    ///
    /// # Example
    /// ```
    /// use cvd_sim::Rgba;
    /// let red = Rgba::opaque(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a pixel from an interleaved `[R, G, B, A]` group.
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to an interleaved `[R, G, B, A]` group.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Replace the color channels, keeping alpha.
    ///
    /// Channels are rounded and clamped to 0..=255.
    #[inline]
    pub fn with_rgb(self, rgb: Rgb) -> Self {
        Self {
            r: to_u8_channel(rgb.r),
            g: to_u8_channel(rgb.g),
            b: to_u8_channel(rgb.b),
            a: self.a,
        }
    }
}

/// A color as three floating point sRGB channels on the 0.0..=255.0 scale.
///
/// Values are not clamped on construction: a matrix product or LAB shift may
/// briefly leave the range and is clamped where it is stored back into an
/// [`Rgba`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in R, G, B order.
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Clamp every channel to 0.0..=255.0.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 255.0),
            self.g.clamp(0.0, 255.0),
            self.b.clamp(0.0, 255.0),
        )
    }

    /// True when every channel is a finite number.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl From<Rgba> for Rgb {
    #[inline]
    fn from(pixel: Rgba) -> Self {
        Self::new(pixel.r as f32, pixel.g as f32, pixel.b as f32)
    }
}
