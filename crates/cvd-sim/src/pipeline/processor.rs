//! Raster-wide transformation: channel adjustment, then deficiency simulation.
//!
//! # Processing Order
//!
//! For every pixel, in row-major order:
//!
//! 1. **Channel adjustment** (if an adjustment was supplied)
//! 2. **Deficiency simulation** blended by intensity
//!
//! Alpha is copied through unchanged. Parameters are validated before the
//! first byte is written, so a call either transforms every pixel or
//! returns an error and leaves the buffers as they were.
//!
//! # Parallelism
//!
//! With the `parallel` feature the buffer is split into fixed-size blocks
//! processed on the rayon pool. Each pixel's transform depends only on that
//! pixel, so the output is bit-identical to the sequential path.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::adjust::{ChannelAdjuster, ChannelAdjustment};
use crate::api::SimError;
use crate::color::Rgba;
use crate::simulate::{simulate, DeficiencyType, Intensity};

use super::raster::{RasterBuffer, CHANNELS};

/// Pixels per parallel work item.
#[cfg(feature = "parallel")]
const BLOCK_PIXELS: usize = 4096;

/// Reusable per-pixel pipeline.
///
/// Configuration methods consume and return `self`; processing takes `&self`
/// so one pipeline can be shared across threads and images.
///
/// # Example
///
/// ```
/// use cvd_sim::{ChannelAdjustment, DeficiencyType, Intensity, PixelPipeline, RasterBuffer, Rgba};
///
/// let pipeline = PixelPipeline::new(DeficiencyType::Protanopia)
///     .intensity(Intensity::FULL)
///     .adjustment(ChannelAdjustment::new());
///
/// let input = RasterBuffer::filled(4, 4, Rgba::opaque(255, 0, 0)).unwrap();
/// let output = pipeline.process(&input).unwrap();
/// assert_eq!(output.pixel(0, 0), Some(Rgba::opaque(145, 142, 0)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelPipeline {
    deficiency: DeficiencyType,
    intensity: Intensity,
    adjuster: Option<ChannelAdjuster>,
}

impl PixelPipeline {
    /// Create a pipeline for the given deficiency at full intensity with no
    /// channel adjustment.
    pub fn new(deficiency: DeficiencyType) -> Self {
        Self {
            deficiency,
            intensity: Intensity::FULL,
            adjuster: None,
        }
    }

    /// Set the simulation intensity.
    #[inline]
    pub fn intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    /// Apply a channel adjustment before simulation.
    #[inline]
    pub fn adjustment(mut self, adjustment: ChannelAdjustment) -> Self {
        self.adjuster = Some(ChannelAdjuster::new(adjustment));
        self
    }

    #[inline]
    pub fn deficiency_type(&self) -> DeficiencyType {
        self.deficiency
    }

    #[inline]
    pub fn intensity_value(&self) -> Intensity {
        self.intensity
    }

    /// The adjustment in effect (identity when none was supplied).
    pub fn adjustment_value(&self) -> ChannelAdjustment {
        self.adjuster
            .map(|a| *a.adjustment())
            .unwrap_or_default()
    }

    /// True when processing cannot change any pixel.
    pub fn is_noop(&self) -> bool {
        let simulation_off =
            self.deficiency == DeficiencyType::None || self.intensity == Intensity::ZERO;
        simulation_off && self.adjustment_value().is_identity()
    }

    /// Transform one pixel.
    #[inline]
    pub fn transform_pixel(&self, pixel: Rgba) -> Rgba {
        let adjusted = match &self.adjuster {
            Some(adjuster) => adjuster.adjust(pixel),
            None => pixel,
        };
        simulate(adjusted, self.deficiency, self.intensity)
    }

    fn validate(&self) -> Result<(), SimError> {
        match &self.adjuster {
            Some(adjuster) => adjuster.adjustment().validate(),
            None => Ok(()),
        }
    }

    /// Transform into a new raster, leaving the input untouched.
    pub fn process(&self, input: &RasterBuffer) -> Result<RasterBuffer, SimError> {
        self.validate()?;
        let mut output = input.clone();
        if !self.is_noop() {
            self.transform_bytes(output.as_bytes_mut());
        }
        Ok(output)
    }

    /// Transform a raster the caller owns exclusively.
    pub fn process_in_place(&self, raster: &mut RasterBuffer) -> Result<(), SimError> {
        self.validate()?;
        if !self.is_noop() {
            self.transform_bytes(raster.as_bytes_mut());
        }
        Ok(())
    }

    /// Transform `input` into a caller-supplied `output` of identical size.
    ///
    /// # Errors
    /// [`SimError::DimensionMismatch`] if the rasters differ in size; the
    /// output is not touched in that case.
    pub fn process_into(
        &self,
        input: &RasterBuffer,
        output: &mut RasterBuffer,
    ) -> Result<(), SimError> {
        if input.dimensions() != output.dimensions() {
            return Err(SimError::DimensionMismatch {
                input: input.dimensions(),
                output: output.dimensions(),
            });
        }
        self.validate()?;
        self.transform_pairs(input.as_bytes(), output.as_bytes_mut());
        Ok(())
    }

    fn transform_group(&self, group: &mut [u8]) {
        let pixel = Rgba::new(group[0], group[1], group[2], group[3]);
        group.copy_from_slice(&self.transform_pixel(pixel).to_bytes());
    }

    #[cfg(not(feature = "parallel"))]
    fn transform_bytes(&self, data: &mut [u8]) {
        for group in data.chunks_exact_mut(CHANNELS) {
            self.transform_group(group);
        }
    }

    #[cfg(feature = "parallel")]
    fn transform_bytes(&self, data: &mut [u8]) {
        data.par_chunks_mut(BLOCK_PIXELS * CHANNELS).for_each(|block| {
            for group in block.chunks_exact_mut(CHANNELS) {
                self.transform_group(group);
            }
        });
    }

    #[cfg(not(feature = "parallel"))]
    fn transform_pairs(&self, input: &[u8], output: &mut [u8]) {
        for (src, dst) in input
            .chunks_exact(CHANNELS)
            .zip(output.chunks_exact_mut(CHANNELS))
        {
            dst.copy_from_slice(src);
            self.transform_group(dst);
        }
    }

    #[cfg(feature = "parallel")]
    fn transform_pairs(&self, input: &[u8], output: &mut [u8]) {
        output
            .par_chunks_mut(BLOCK_PIXELS * CHANNELS)
            .zip(input.par_chunks(BLOCK_PIXELS * CHANNELS))
            .for_each(|(dst_block, src_block)| {
                dst_block.copy_from_slice(src_block);
                for group in dst_block.chunks_exact_mut(CHANNELS) {
                    self.transform_group(group);
                }
            });
    }
}
