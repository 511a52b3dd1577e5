#![allow(clippy::excessive_precision, clippy::manual_range_contains)]

//! cvd-sim: colour-vision deficiency simulation for RGBA rasters
//!
//! This library simulates protanopia, deuteranopia and tritanopia on
//! in-memory images, optionally after manual channel adjustments in RGB,
//! HSV and CIE L\*a\*b\*, and derives colour statistics from the result.
//! It does no file or network I/O; callers decode images into a
//! [`RasterBuffer`] and encode the output themselves.
//!
//! # Quick Start
//!
//! The [`CvdSimulator`] builder is the primary entry point:
//!
//! ```
//! use cvd_sim::{CvdSimulator, DeficiencyType, RasterBuffer, Rgba};
//!
//! let raster = RasterBuffer::filled(2, 2, Rgba::opaque(255, 0, 0)).unwrap();
//! let output = CvdSimulator::new(DeficiencyType::Protanopia)
//!     .simulate(&raster)
//!     .unwrap();
//!
//! assert_eq!(output.pixel(0, 0), Some(Rgba::opaque(145, 142, 0)));
//! ```
//!
//! # Per-Pixel API
//!
//! The building blocks are public for callers that work pixel by pixel:
//!
//! ```
//! use cvd_sim::{simulate, ChannelAdjuster, ChannelAdjustment, DeficiencyType, Intensity, Rgba};
//!
//! let adjuster = ChannelAdjuster::new(ChannelAdjustment::new().hsv(120, 0, 0));
//! let green = adjuster.adjust(Rgba::opaque(255, 0, 0));
//! assert_eq!(green, Rgba::opaque(0, 255, 0));
//!
//! let seen = simulate(green, DeficiencyType::Deuteranopia, Intensity::new(50).unwrap());
//! assert_eq!(seen.a, 255);
//! ```
//!
//! # Processing Model
//!
//! ```text
//! RasterBuffer (RGBA8)
//!     |
//!     v
//! RGB offset          (c + offset * 2.55, clamp)
//!     |
//!     v
//! HSV shift           (only when h, s or v is non-zero)
//!     |
//!     v
//! LAB shift           (only when l, a or b is non-zero)
//!     |
//!     v
//! Deficiency matrix   (blended with the input by intensity, clamp, round)
//!     |
//!     v
//! RasterBuffer (RGBA8, alpha untouched)
//! ```
//!
//! The RGB offset stays fractional; the HSV and LAB stages each return
//! whole channel values. The adjusted pixel is stored as `u8` before the
//! matrix step, and the simulated result is rounded again. Skipped stages
//! never touch the pixel, so an all-zero adjustment with
//! [`DeficiencyType::None`] or intensity 0 reproduces the input byte for
//! byte.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for parameter and result types
//! - `parallel`: process rasters on the rayon thread pool

pub mod adjust;
pub mod analysis;
pub mod api;
pub mod color;
pub mod pipeline;
pub mod simulate;


pub use adjust::{ChannelAdjuster, ChannelAdjustment, HsvShift, LabShift, RgbOffset};
pub use analysis::{
    dominant_colors, DominantColor, DominantColorOptions, ScatterPoint, VariationAnalyzer,
    VariationStats,
};
pub use api::{CvdSimulator, SimError};
pub use color::{hsv_to_rgb, lab_to_rgb, rgb_to_hsv, rgb_to_lab, Hsv, Lab, Rgb, Rgba};
pub use pipeline::{PixelPipeline, RasterBuffer};
pub use simulate::{simulate, simulate_rgb, DeficiencyType, Intensity};
