//! Dominant colours by quantised histogram.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pipeline::RasterBuffer;

/// Width of one quantisation bucket per channel.
const BUCKET: u32 = 30;

/// Options for [`dominant_colors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DominantColorOptions {
    /// Longest side of the downscaled sample grid. Smaller images are
    /// sampled at their own size.
    pub max_side: u32,
    /// Number of colours to report.
    pub top: usize,
}

impl Default for DominantColorOptions {
    fn default() -> Self {
        Self {
            max_side: 100,
            top: 5,
        }
    }
}

/// A quantised colour and its share of the sampled pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DominantColor {
    pub color: [u8; 3],
    /// Share of sampled pixels, 0.0..=100.0
    pub percentage: f64,
}

impl DominantColor {
    /// `#rrggbb` form of the colour.
    pub fn hex(&self) -> String {
        let [r, g, b] = self.color;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Round a channel to the nearest multiple of 30, capped at 255.
#[inline]
fn quantize(channel: u8) -> u8 {
    (((channel as u32 + BUCKET / 2) / BUCKET) * BUCKET).min(255) as u8
}

/// Sample grid size that fits `max_side` without upscaling.
fn sample_dimensions(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let max_side = max_side.max(1);
    let longest = width.max(height);
    if longest <= max_side {
        return (width, height);
    }
    let scale = max_side as f64 / longest as f64;
    let w = ((width as f64 * scale) as u32).max(1);
    let h = ((height as f64 * scale) as u32).max(1);
    (w, h)
}

/// Report the most common quantised colours, most frequent first.
///
/// The raster is downscaled by nearest-neighbour sampling to fit
/// `max_side`, each channel is quantised to multiples of 30, and the
/// histogram is sorted by count then by colour so ties resolve the same way
/// every time. Alpha is ignored.
///
/// # Example
///
/// ```
/// use cvd_sim::{dominant_colors, DominantColorOptions, RasterBuffer, Rgba};
///
/// let raster = RasterBuffer::filled(8, 8, Rgba::opaque(250, 2, 61)).unwrap();
/// let colors = dominant_colors(&raster, DominantColorOptions::default());
///
/// assert_eq!(colors.len(), 1);
/// assert_eq!(colors[0].color, [240, 0, 60]);
/// assert_eq!(colors[0].percentage, 100.0);
/// ```
pub fn dominant_colors(raster: &RasterBuffer, options: DominantColorOptions) -> Vec<DominantColor> {
    let (width, height) = raster.dimensions();
    let (sample_w, sample_h) = sample_dimensions(width, height, options.max_side);

    let mut histogram: HashMap<[u8; 3], u32> = HashMap::new();
    for sy in 0..sample_h {
        let y = ((sy as u64 * 2 + 1) * height as u64 / (sample_h as u64 * 2)) as u32;
        for sx in 0..sample_w {
            let x = ((sx as u64 * 2 + 1) * width as u64 / (sample_w as u64 * 2)) as u32;
            if let Some(pixel) = raster.pixel(x, y) {
                let key = [quantize(pixel.r), quantize(pixel.g), quantize(pixel.b)];
                *histogram.entry(key).or_insert(0) += 1;
            }
        }
    }

    let total = sample_w as f64 * sample_h as f64;
    let mut entries: Vec<([u8; 3], u32)> = histogram.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    entries
        .into_iter()
        .take(options.top)
        .map(|(color, count)| DominantColor {
            color,
            percentage: count as f64 / total * 100.0,
        })
        .collect()
}
