//! Owned RGBA raster buffer.

use crate::api::SimError;
use crate::color::Rgba;

/// Bytes per interleaved RGBA pixel.
pub const CHANNELS: usize = 4;

/// A decoded image: `width × height` pixels, row-major, RGBA interleaved.
///
/// Construction validates the dimensions, so every `RasterBuffer` in
/// existence is non-empty and exactly `width * height * 4` bytes long.
///
/// # Example
///
/// ```
/// use cvd_sim::{RasterBuffer, Rgba};
///
/// let raster = RasterBuffer::filled(2, 1, Rgba::opaque(10, 20, 30)).unwrap();
/// assert_eq!(raster.as_bytes(), &[10, 20, 30, 255, 10, 20, 30, 255]);
/// assert_eq!(raster.pixel(1, 0), Some(Rgba::opaque(10, 20, 30)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Wrap an RGBA byte buffer.
    ///
    /// # Errors
    /// - [`SimError::ZeroDimensions`] if width or height is zero
    /// - [`SimError::DimensionsTooLarge`] if the byte length overflows `usize`
    /// - [`SimError::BufferSizeMismatch`] if `data.len() != width * height * 4`
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, SimError> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(SimError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a raster from pixels in row-major order.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Rgba]) -> Result<Self, SimError> {
        let data = pixels.iter().flat_map(|p| p.to_bytes()).collect();
        Self::new(width, height, data)
    }

    /// A raster where every pixel is `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Rgba) -> Result<Self, SimError> {
        let len = Self::byte_len(width, height)?;
        let data = pixel.to_bytes().into_iter().cycle().take(len).collect();
        Self::new(width, height, data)
    }

    fn byte_len(width: u32, height: u32) -> Result<usize, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::ZeroDimensions { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or(SimError::DimensionsTooLarge { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at column `x`, row `y`, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixel_at(y as usize * self.width as usize + x as usize))
    }

    /// Pixel at a flat row-major index.
    ///
    /// # Panics
    /// Panics if `index >= pixel_count()`.
    #[inline]
    pub fn pixel_at(&self, index: usize) -> Rgba {
        let offset = index * CHANNELS;
        Rgba::new(
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        )
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
    }
}
