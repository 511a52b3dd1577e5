//! Color types and conversion utilities
//!
//! This module provides the pixel type and the three color spaces the
//! adjustment chain moves through.
//!
//! # Color Spaces
//!
//! - **Rgba**: 8-bit storage pixel, the unit of every raster buffer.
//! - **Rgb**: floating point sRGB channels on the 0.0..=255.0 scale. Used for
//!   intermediate values between adjustment stages.
//! - **Hsv**: hue in degrees, saturation and value in percent.
//! - **Lab**: CIE L\*a\*b\* relative to the D65 white point.
//!
//! # Example
//!
//! ```
//! use cvd_sim::{Hsv, Lab, Rgb};
//!
//! let orange = Rgb::new(255.0, 128.0, 0.0);
//!
//! let hsv = Hsv::from(orange);
//! assert!((hsv.h - 30.1).abs() < 0.1);
//!
//! let back = Rgb::from(Lab::from(orange));
//! assert!((back.g - 128.0).abs() < 0.5);
//! ```

mod hsv;
mod lab;
mod lut;
mod rgb;

pub use hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
pub use lab::{lab_to_rgb, rgb_to_lab, Lab};
pub use rgb::{to_u8_channel, Rgb, Rgba};
