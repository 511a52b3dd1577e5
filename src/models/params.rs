use cvd_sim::{ChannelAdjustment, CvdSimulator, DeficiencyType, Intensity, PixelPipeline};
use serde::{Deserialize, Serialize};

use crate::error::LensError;

/// Everything that determines how one preview is rendered.
///
/// Missing fields deserialise to the identity: no deficiency, full
/// intensity, zero adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    pub deficiency: DeficiencyType,
    pub intensity: Intensity,
    pub adjustment: ChannelAdjustment,
}

impl RenderParams {
    pub fn new(deficiency: DeficiencyType) -> Self {
        Self {
            deficiency,
            ..Default::default()
        }
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_adjustment(mut self, adjustment: ChannelAdjustment) -> Self {
        self.adjustment = adjustment;
        self
    }

    /// Same parameters for a different deficiency (grid view).
    pub fn for_deficiency(mut self, deficiency: DeficiencyType) -> Self {
        self.deficiency = deficiency;
        self
    }

    /// Reject adjustment values outside their slider ranges.
    pub fn validate(&self) -> Result<(), LensError> {
        self.adjustment.validate()?;
        Ok(())
    }

    pub fn pipeline(&self) -> PixelPipeline {
        PixelPipeline::new(self.deficiency)
            .intensity(self.intensity)
            .adjustment(self.adjustment)
    }

    pub fn simulator(&self) -> CvdSimulator {
        CvdSimulator::new(self.deficiency)
            .intensity(self.intensity)
            .adjustment(self.adjustment)
    }
}
