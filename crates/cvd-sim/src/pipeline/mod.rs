//! Raster buffers and the per-pixel processing pipeline.
//!
//! [`RasterBuffer`] owns a validated RGBA image. [`PixelPipeline`] runs
//! channel adjustment followed by deficiency simulation over every pixel,
//! either into a new buffer, in place, or into a caller-supplied output.

mod processor;
mod raster;

pub use processor::PixelPipeline;
pub use raster::{RasterBuffer, CHANNELS};
