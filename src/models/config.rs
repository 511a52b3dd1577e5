use cvd_sim::DominantColorOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LensError;
use crate::models::RenderParams;
use crate::rendering::ExportFormat;

/// Application configuration loaded from config.yaml
///
/// Every section is optional; omitted fields take their defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Variation analysis sampling
    pub analysis: AnalysisConfig,

    /// Dominant colour histogram
    pub dominant: DominantColorOptions,

    /// Export encoding
    pub export: ExportConfig,

    /// Image source loading
    pub loader: LoaderConfig,

    /// Render parameters used when a request does not supply its own
    pub defaults: RenderParams,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Analyse every n-th pixel
    pub stride: usize,

    /// Cap on points per scatter channel
    pub max_scatter_points: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stride: 10,
            max_scatter_points: 200,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when the caller does not pick one
    pub format: ExportFormat,

    /// JPEG quality, 1..=100
    pub jpeg_quality: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            jpeg_quality: 95,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct LoaderConfig {
    /// Largest encoded image accepted from any source
    pub max_image_bytes: usize,

    /// Timeout for URL fetches in seconds
    pub fetch_timeout_secs: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: 32 * 1024 * 1024,
            fetch_timeout_secs: 15,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing, unreadable or invalid file logs a warning and yields the
    /// defaults.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        stride = config.analysis.stride,
                        deficiency = %config.defaults.deficiency,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Self, LensError> {
        // An empty document deserialises to unit, not to an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| LensError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot express as types.
    pub fn validate(&self) -> Result<(), LensError> {
        if self.analysis.stride == 0 {
            return Err(LensError::Config("analysis.stride must be at least 1".into()));
        }
        if !(1..=100).contains(&self.export.jpeg_quality) {
            return Err(LensError::Config(format!(
                "export.jpeg_quality {} out of range 1..=100",
                self.export.jpeg_quality
            )));
        }
        if self.dominant.max_side == 0 {
            return Err(LensError::Config("dominant.max_side must be at least 1".into()));
        }
        self.defaults
            .validate()
            .map_err(|e| LensError::Config(format!("defaults: {e}")))?;
        Ok(())
    }
}
