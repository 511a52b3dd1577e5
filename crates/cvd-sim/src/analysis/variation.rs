//! Strided colour and saturation statistics for an adjustment.
//!
//! The analyzer measures what a [`ChannelAdjustment`] does to an image: how
//! far each sampled pixel moves, how colourful the result is, and how the
//! saturation shifts. Deficiency simulation is not part of the measurement.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::adjust::{ChannelAdjuster, ChannelAdjustment};
use crate::api::SimError;
use crate::color::{Hsv, Rgb};
use crate::pipeline::RasterBuffer;

/// Analyze every 10th pixel by default.
pub const DEFAULT_STRIDE: usize = 10;

/// Maximum points per channel in the scatter data by default.
pub const DEFAULT_MAX_SCATTER_POINTS: usize = 200;

/// Every n-th sample contributes a scatter point.
const SCATTER_INTERVAL: usize = 50;

/// One point of the intensity/saturation scatter plot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScatterPoint {
    /// Adjusted channel value, 0.0..=255.0
    pub intensity: f32,
    /// Adjusted saturation of the same pixel, 0.0..=100.0
    pub saturation: f32,
}

/// Averages and scatter data produced by [`VariationAnalyzer::analyze`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariationStats {
    /// Mean of `sqrt(Σ(c − mean)²) / 3` over the adjusted channels
    pub avg_color_variation: f64,
    /// Mean adjusted saturation in percent
    pub avg_saturation_variation: f64,
    /// Mean of `sqrt(Σ(c' − c)²) / 3` between adjusted and original
    pub avg_color_change: f64,
    /// Mean absolute saturation change in percentage points
    pub avg_saturation_change: f64,
    pub red: Vec<ScatterPoint>,
    pub green: Vec<ScatterPoint>,
    pub blue: Vec<ScatterPoint>,
    /// Number of pixels that contributed to the averages
    pub sampled_pixels: usize,
}

#[derive(Default)]
struct Totals {
    color_variation: f64,
    saturation: f64,
    color_change: f64,
    saturation_change: f64,
}

/// Computes [`VariationStats`] for one adjustment.
///
/// # Example
///
/// ```
/// use cvd_sim::{ChannelAdjustment, RasterBuffer, Rgba, VariationAnalyzer};
///
/// let raster = RasterBuffer::filled(10, 10, Rgba::opaque(200, 100, 50)).unwrap();
/// let stats = VariationAnalyzer::new(ChannelAdjustment::new())
///     .stride(1)
///     .analyze(&raster)
///     .unwrap();
///
/// assert_eq!(stats.sampled_pixels, 100);
/// assert_eq!(stats.avg_color_change, 0.0);
/// assert_eq!(stats.red.len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VariationAnalyzer {
    adjuster: ChannelAdjuster,
    stride: usize,
    max_points: usize,
}

impl VariationAnalyzer {
    pub fn new(adjustment: ChannelAdjustment) -> Self {
        Self {
            adjuster: ChannelAdjuster::new(adjustment),
            stride: DEFAULT_STRIDE,
            max_points: DEFAULT_MAX_SCATTER_POINTS,
        }
    }

    /// Sample every `stride`-th pixel. Zero is rejected by [`analyze`](Self::analyze).
    #[inline]
    pub fn stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Cap each scatter set at `max_points`.
    #[inline]
    pub fn max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Walk the raster at the configured stride and average the metrics.
    ///
    /// # Errors
    /// - [`SimError::InvalidStride`] if the stride is zero
    /// - [`SimError::AdjustmentOutOfRange`] if the adjustment fails validation
    pub fn analyze(&self, raster: &RasterBuffer) -> Result<VariationStats, SimError> {
        if self.stride == 0 {
            return Err(SimError::InvalidStride);
        }
        self.adjuster.adjustment().validate()?;

        let mut totals = Totals::default();
        let mut stats = VariationStats::default();

        for index in (0..raster.pixel_count()).step_by(self.stride) {
            let original = Rgb::from(raster.pixel_at(index));
            let adjusted = self.adjuster.adjust_rgb(original);

            let original_s = Hsv::from(original).s;
            let adjusted_s = Hsv::from(adjusted).s;

            totals.color_variation += color_variation(adjusted);
            totals.saturation += adjusted_s as f64;
            totals.color_change += color_distance(adjusted, original);
            totals.saturation_change += (adjusted_s as f64 - original_s as f64).abs();
            stats.sampled_pixels += 1;

            if stats.sampled_pixels % SCATTER_INTERVAL == 0 {
                push_capped(&mut stats.red, adjusted.r, adjusted_s, self.max_points);
                push_capped(&mut stats.green, adjusted.g, adjusted_s, self.max_points);
                push_capped(&mut stats.blue, adjusted.b, adjusted_s, self.max_points);
            }
        }

        // Never zero: a RasterBuffer holds at least one pixel and index 0 is
        // always sampled.
        let n = stats.sampled_pixels as f64;
        stats.avg_color_variation = totals.color_variation / n;
        stats.avg_saturation_variation = totals.saturation / n;
        stats.avg_color_change = totals.color_change / n;
        stats.avg_saturation_change = totals.saturation_change / n;

        Ok(stats)
    }
}

impl Default for VariationAnalyzer {
    fn default() -> Self {
        Self::new(ChannelAdjustment::identity())
    }
}

fn push_capped(points: &mut Vec<ScatterPoint>, intensity: f32, saturation: f32, cap: usize) {
    if points.len() < cap {
        points.push(ScatterPoint {
            intensity,
            saturation,
        });
    }
}

/// Spread of the channels around their mean, divided by 3.
fn color_variation(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.to_array().map(f64::from);
    let mean = (r + g + b) / 3.0;
    ((r - mean).powi(2) + (g - mean).powi(2) + (b - mean).powi(2)).sqrt() / 3.0
}

/// Euclidean distance between two colours, divided by 3.
fn color_distance(a: Rgb, b: Rgb) -> f64 {
    let a = a.to_array().map(f64::from);
    let b = b.to_array().map(f64::from);
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
        / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_zero_stride_rejected() {
        let raster = RasterBuffer::filled(2, 2, Rgba::default()).unwrap();
        let err = VariationAnalyzer::default()
            .stride(0)
            .analyze(&raster)
            .unwrap_err();
        assert_eq!(err, SimError::InvalidStride);
    }

    #[test]
    fn test_invalid_adjustment_rejected() {
        let raster = RasterBuffer::filled(2, 2, Rgba::default()).unwrap();
        let result = VariationAnalyzer::new(ChannelAdjustment::new().rgb(0, 0, -101)).analyze(&raster);
        assert!(matches!(
            result,
            Err(SimError::AdjustmentOutOfRange { field: "rgb.b", .. })
        ));
    }

    #[test]
    fn test_sampling_stride() {
        let raster = RasterBuffer::filled(25, 1, Rgba::default()).unwrap();
        // Indices 0, 10, 20
        let stats = VariationAnalyzer::default().analyze(&raster).unwrap();
        assert_eq!(stats.sampled_pixels, 3);

        let stats = VariationAnalyzer::default().stride(1).analyze(&raster).unwrap();
        assert_eq!(stats.sampled_pixels, 25);
    }

    #[test]
    fn test_gray_has_no_variation() {
        let raster = RasterBuffer::filled(10, 10, Rgba::opaque(90, 90, 90)).unwrap();
        let stats = VariationAnalyzer::default().stride(1).analyze(&raster).unwrap();
        assert_eq!(stats.avg_color_variation, 0.0);
        assert_eq!(stats.avg_saturation_variation, 0.0);
        assert_eq!(stats.avg_color_change, 0.0);
        assert_eq!(stats.avg_saturation_change, 0.0);
    }

    #[test]
    fn test_pure_red_metrics() {
        let raster = RasterBuffer::filled(4, 4, Rgba::opaque(255, 0, 0)).unwrap();
        let stats = VariationAnalyzer::default().stride(1).analyze(&raster).unwrap();
        // mean 85: sqrt(170² + 85² + 85²) / 3
        let expected = (170.0f64.powi(2) + 2.0 * 85.0f64.powi(2)).sqrt() / 3.0;
        assert!(approx(stats.avg_color_variation, expected));
        assert!(approx(stats.avg_saturation_variation, 100.0));
    }

    #[test]
    fn test_rgb_offset_change_is_fractional() {
        // Offset 10 adds 25.5 to red; the metric sees the unrounded value.
        let raster = RasterBuffer::filled(1, 1, Rgba::opaque(100, 100, 100)).unwrap();
        let stats = VariationAnalyzer::new(ChannelAdjustment::new().rgb(10, 0, 0))
            .analyze(&raster)
            .unwrap();
        assert!(approx(stats.avg_color_change, 25.5 / 3.0));
    }

    #[test]
    fn test_desaturation_change() {
        let raster = RasterBuffer::filled(3, 3, Rgba::opaque(0, 0, 255)).unwrap();
        let stats = VariationAnalyzer::new(ChannelAdjustment::new().hsv(0, -100, 0))
            .stride(1)
            .analyze(&raster)
            .unwrap();
        assert!(approx(stats.avg_saturation_change, 100.0));
        assert!(approx(stats.avg_saturation_variation, 0.0));
    }

    #[test]
    fn test_scatter_points_every_fiftieth_sample() {
        let raster = RasterBuffer::filled(149, 1, Rgba::opaque(10, 20, 30)).unwrap();
        let stats = VariationAnalyzer::default().stride(1).analyze(&raster).unwrap();
        // Samples 50 and 100 qualify, 150 does not exist
        assert_eq!(stats.red.len(), 2);
        assert_eq!(stats.green.len(), 2);
        assert_eq!(stats.blue.len(), 2);
        assert_eq!(stats.green[0].intensity, 20.0);
        assert_eq!(stats.blue[1].intensity, 30.0);
    }

    #[test]
    fn test_scatter_intensity_whole_after_hsv_stage() {
        let raster = RasterBuffer::filled(60, 1, Rgba::opaque(200, 120, 40)).unwrap();
        let stats = VariationAnalyzer::new(ChannelAdjustment::new().rgb(3, 0, 0).hsv(25, 0, -7))
            .stride(1)
            .analyze(&raster)
            .unwrap();
        assert_eq!(stats.red.len(), 1);
        for point in stats.red.iter().chain(&stats.green).chain(&stats.blue) {
            assert_eq!(point.intensity, point.intensity.round(), "{point:?}");
        }
    }

    #[test]
    fn test_scatter_cap_configurable() {
        let raster = RasterBuffer::filled(100, 10, Rgba::opaque(1, 2, 3)).unwrap();
        let stats = VariationAnalyzer::default()
            .stride(1)
            .max_points(3)
            .analyze(&raster)
            .unwrap();
        assert_eq!(stats.sampled_pixels, 1000);
        assert_eq!(stats.red.len(), 3);
    }
}
