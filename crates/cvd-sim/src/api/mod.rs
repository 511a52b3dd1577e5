//! Public API for the cvd-sim crate.
//!
//! This module provides the high-level API: [`CvdSimulator`] builder and
//! [`SimError`] unified error type.

mod builder;
mod error;

pub use builder::CvdSimulator;
pub use error::SimError;
