//! Unified error type for the cvd-sim public API.
//!
//! Every fallible entry point validates its input up front and returns a
//! [`SimError`] before any pixel is written.

use std::fmt;

/// Unified error type for the cvd-sim public API.
///
/// # Example
///
/// ```
/// use cvd_sim::{RasterBuffer, SimError};
///
/// let err = RasterBuffer::new(0, 10, Vec::new()).unwrap_err();
/// assert_eq!(err, SimError::ZeroDimensions { width: 0, height: 10 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Width or height is zero
    ZeroDimensions {
        width: u32,
        height: u32,
    },
    /// width * height * 4 does not fit in `usize`
    DimensionsTooLarge {
        width: u32,
        height: u32,
    },
    /// Byte length does not equal width * height * 4
    BufferSizeMismatch {
        /// Bytes required by the declared dimensions
        expected: usize,
        /// Bytes actually supplied
        actual: usize,
    },
    /// Input and output rasters have different dimensions
    DimensionMismatch {
        input: (u32, u32),
        output: (u32, u32),
    },
    /// Intensity above 100 percent
    IntensityOutOfRange(u8),
    /// A channel adjustment field is outside its slider range
    AdjustmentOutOfRange {
        /// Field name, e.g. `"hsv.h"`
        field: &'static str,
        value: i16,
        min: i16,
        max: i16,
    },
    /// Sampling stride of zero
    InvalidStride,
    /// Deficiency name that is not one of none/protanopia/deuteranopia/tritanopia
    UnknownDeficiency(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::ZeroDimensions { width, height } => {
                write!(f, "raster has zero dimension: {}x{}", width, height)
            }
            SimError::DimensionsTooLarge { width, height } => {
                write!(f, "raster dimensions {}x{} overflow the address space", width, height)
            }
            SimError::BufferSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "raster buffer size mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
            SimError::DimensionMismatch { input, output } => {
                write!(
                    f,
                    "output raster is {}x{}, input is {}x{}",
                    output.0, output.1, input.0, input.1
                )
            }
            SimError::IntensityOutOfRange(value) => {
                write!(f, "intensity {} out of range 0..=100", value)
            }
            SimError::AdjustmentOutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "adjustment {} = {} out of range {}..={}",
                    field, value, min, max
                )
            }
            SimError::InvalidStride => write!(f, "sampling stride must be at least 1"),
            SimError::UnknownDeficiency(name) => {
                write!(f, "unknown deficiency type: {:?}", name)
            }
        }
    }
}

impl std::error::Error for SimError {}
