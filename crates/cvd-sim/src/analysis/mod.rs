//! Image analytics.
//!
//! - [`VariationAnalyzer`]: strided statistics describing what a channel
//!   adjustment does to an image, plus per-channel scatter data.
//! - [`dominant_colors`]: the most common colours after coarse quantisation.
//!
//! Both are read-only over a [`RasterBuffer`](crate::RasterBuffer) and
//! deterministic for identical input.

mod dominant;
mod variation;

pub use dominant::{dominant_colors, DominantColor, DominantColorOptions};
pub use variation::{
    ScatterPoint, VariationAnalyzer, VariationStats, DEFAULT_MAX_SCATTER_POINTS, DEFAULT_STRIDE,
};
