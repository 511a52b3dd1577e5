//! Chromalens
//!
//! Colour-vision deficiency previews for images: load from a file, URL or
//! data URL, adjust channels, simulate protanopia, deuteranopia or
//! tritanopia, analyse the result and export it as PNG or JPEG.
//! The pixel maths lives in the `cvd-sim` crate; this library exposes the
//! async service layer around it.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
pub mod telemetry;

pub use error::LensError;
pub use models::{AppConfig, RenderParams};
pub use rendering::ExportFormat;
pub use services::{ImageSource, PreviewSession, SimulationService};
