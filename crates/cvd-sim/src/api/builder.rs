//! CvdSimulator builder -- the primary ergonomic entry point for the crate.
//!
//! [`CvdSimulator`] bundles the pixel pipeline and both analysers behind one
//! fluent configuration.

use crate::adjust::ChannelAdjustment;
use crate::analysis::{
    dominant_colors, DominantColor, DominantColorOptions, VariationAnalyzer, VariationStats,
    DEFAULT_MAX_SCATTER_POINTS, DEFAULT_STRIDE,
};
use crate::pipeline::{PixelPipeline, RasterBuffer};
use crate::simulate::{DeficiencyType, Intensity};

use super::SimError;

/// High-level simulation builder.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - Processing and analysis take `&self`, so one simulator is reusable
///   across images and threads
/// - Nothing is validated until a raster is processed; every entry point
///   validates before touching pixels
///
/// # Example
///
/// ```
/// use cvd_sim::{ChannelAdjustment, CvdSimulator, DeficiencyType, Intensity, RasterBuffer, Rgba};
///
/// let simulator = CvdSimulator::new(DeficiencyType::Deuteranopia)
///     .intensity(Intensity::new(75).unwrap())
///     .adjustment(ChannelAdjustment::new().hsv(15, 0, 0));
///
/// let raster = RasterBuffer::filled(3, 2, Rgba::opaque(200, 40, 40)).unwrap();
/// let output = simulator.simulate(&raster).unwrap();
/// assert_eq!(output.dimensions(), (3, 2));
///
/// let stats = simulator.analyze(&raster).unwrap();
/// assert_eq!(stats.sampled_pixels, 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CvdSimulator {
    deficiency: DeficiencyType,
    intensity: Intensity,
    adjustment: ChannelAdjustment,
    stride: usize,
    max_scatter_points: usize,
    dominant: DominantColorOptions,
}

impl CvdSimulator {
    /// Create a simulator at full intensity with no adjustment.
    pub fn new(deficiency: DeficiencyType) -> Self {
        Self {
            deficiency,
            intensity: Intensity::FULL,
            adjustment: ChannelAdjustment::identity(),
            stride: DEFAULT_STRIDE,
            max_scatter_points: DEFAULT_MAX_SCATTER_POINTS,
            dominant: DominantColorOptions::default(),
        }
    }

    #[inline]
    pub fn intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    #[inline]
    pub fn adjustment(mut self, adjustment: ChannelAdjustment) -> Self {
        self.adjustment = adjustment;
        self
    }

    /// Sampling stride for [`analyze()`](Self::analyze).
    #[inline]
    pub fn stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Scatter set cap for [`analyze()`](Self::analyze).
    #[inline]
    pub fn max_scatter_points(mut self, max_points: usize) -> Self {
        self.max_scatter_points = max_points;
        self
    }

    /// Options for [`dominant_colors()`](Self::dominant_colors).
    #[inline]
    pub fn dominant_options(mut self, options: DominantColorOptions) -> Self {
        self.dominant = options;
        self
    }

    #[inline]
    pub fn deficiency_type(&self) -> DeficiencyType {
        self.deficiency
    }

    /// The configured pixel pipeline.
    pub fn pipeline(&self) -> PixelPipeline {
        PixelPipeline::new(self.deficiency)
            .intensity(self.intensity)
            .adjustment(self.adjustment)
    }

    /// The configured variation analyser.
    pub fn analyzer(&self) -> VariationAnalyzer {
        VariationAnalyzer::new(self.adjustment)
            .stride(self.stride)
            .max_points(self.max_scatter_points)
    }

    /// Adjust and simulate into a new raster.
    pub fn simulate(&self, raster: &RasterBuffer) -> Result<RasterBuffer, SimError> {
        self.pipeline().process(raster)
    }

    /// Adjust and simulate in place.
    pub fn simulate_in_place(&self, raster: &mut RasterBuffer) -> Result<(), SimError> {
        self.pipeline().process_in_place(raster)
    }

    /// Variation statistics for the configured adjustment.
    ///
    /// The deficiency and intensity do not take part in this measurement.
    pub fn analyze(&self, raster: &RasterBuffer) -> Result<VariationStats, SimError> {
        self.analyzer().analyze(raster)
    }

    /// Dominant colours of `raster` as given.
    ///
    /// Pass the output of [`simulate()`](Self::simulate) to see the palette a
    /// viewer with the deficiency perceives.
    pub fn dominant_colors(&self, raster: &RasterBuffer) -> Vec<DominantColor> {
        dominant_colors(raster, self.dominant)
    }
}

impl Default for CvdSimulator {
    fn default() -> Self {
        Self::new(DeficiencyType::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_defaults() {
        let sim = CvdSimulator::default();
        assert_eq!(sim.deficiency_type(), DeficiencyType::None);
        assert!(sim.pipeline().is_noop());
    }

    #[test]
    fn test_simulate_matches_pipeline() {
        let raster = RasterBuffer::filled(5, 5, Rgba::opaque(255, 0, 0)).unwrap();
        let sim = CvdSimulator::new(DeficiencyType::Protanopia);
        let out = sim.simulate(&raster).unwrap();
        assert_eq!(out.pixel(4, 4), Some(Rgba::opaque(145, 142, 0)));

        let mut in_place = raster.clone();
        sim.simulate_in_place(&mut in_place).unwrap();
        assert_eq!(in_place, out);
    }

    #[test]
    fn test_analyze_uses_stride_and_cap() {
        let raster = RasterBuffer::filled(100, 100, Rgba::opaque(9, 9, 9)).unwrap();
        let stats = CvdSimulator::default()
            .stride(2)
            .max_scatter_points(10)
            .analyze(&raster)
            .unwrap();
        assert_eq!(stats.sampled_pixels, 5000);
        assert_eq!(stats.red.len(), 10);

        let err = CvdSimulator::default().stride(0).analyze(&raster).unwrap_err();
        assert_eq!(err, SimError::InvalidStride);
    }

    #[test]
    fn test_dominant_colors_of_simulated_output() {
        let raster = RasterBuffer::filled(10, 10, Rgba::opaque(255, 0, 0)).unwrap();
        let sim = CvdSimulator::new(DeficiencyType::Protanopia);
        let simulated = sim.simulate(&raster).unwrap();
        let colors = sim.dominant_colors(&simulated);
        // (145, 142, 0) quantises to (150, 150, 0)
        assert_eq!(colors[0].color, [150, 150, 0]);
    }
}
