//! Color-vision deficiency simulation.
//!
//! Each [`DeficiencyType`] maps to a fixed 3×3 linear transform applied to
//! sRGB channels. The transformed color is blended with the original by
//! [`Intensity`], so intensity 0 is the original and 100 the full
//! simulation.
//!
//! | Type | Row 1 | Row 2 | Row 3 |
//! |------|-------|-------|-------|
//! | protanopia | 0.567 0.433 0 | 0.558 0.442 0 | 0 0.242 0.758 |
//! | deuteranopia | 0.625 0.375 0 | 0.7 0.3 0 | 0 0.3 0.7 |
//! | tritanopia | 0.95 0.05 0 | 0 0.433 0.567 | 0 0.475 0.525 |
//!
//! Every row sums to 1, so gray stays gray and results normally stay in
//! 0..=255. The blend is still clamped before it is stored.

mod deficiency;
mod simulator;

pub use deficiency::{DeficiencyType, Matrix3};
pub use simulator::{apply_matrix, simulate, simulate_rgb, Intensity};
