//! Manual channel adjustment.
//!
//! A [`ChannelAdjustment`] describes slider offsets in three color spaces;
//! a [`ChannelAdjuster`] applies them to pixels in a fixed order
//! (RGB → HSV → LAB). See [`adjuster`](self) for the stage contract.

mod adjuster;
mod options;

pub use adjuster::ChannelAdjuster;
pub use options::{ChannelAdjustment, HsvShift, LabShift, RgbOffset};
