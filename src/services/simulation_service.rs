use cvd_sim::{CvdSimulator, DeficiencyType, DominantColor, RasterBuffer, VariationStats};
use futures_util::future::try_join_all;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::LensError;
use crate::models::{AppConfig, RenderParams};
use crate::rendering::{encode, export_file_name, ExportFormat};
use crate::services::{ImageLoader, ImageSource};

/// One panel of the side-by-side grid view.
#[derive(Debug, Clone)]
pub struct GridCell {
    pub deficiency: DeficiencyType,
    pub raster: RasterBuffer,
}

/// Analysis panel data for one set of render parameters.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub params: RenderParams,
    /// Effect of the channel adjustment on the source image
    pub variation: VariationStats,
    /// Most common colours of the rendered preview
    pub dominant_colors: Vec<DominantColor>,
}

/// An encoded preview ready to be saved or served.
#[derive(Debug, Clone)]
pub struct ExportedImage {
    pub file_name: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl ExportedImage {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Write into `dir` under [`file_name`](Self::file_name).
    pub async fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, LensError> {
        let path = dir.as_ref().join(&self.file_name);
        tokio::fs::write(&path, &self.bytes).await?;
        tracing::info!(path = %path.display(), size = self.bytes.len(), "Saved export");
        Ok(path)
    }
}

/// Async front for loading, simulating, analysing and exporting images.
///
/// CPU-bound work runs on tokio's blocking pool so callers on the async
/// runtime are never stalled by a large image. Every call works on its own
/// snapshot of the input; nothing is shared between calls except the
/// read-only configuration.
#[derive(Clone)]
pub struct SimulationService {
    config: Arc<AppConfig>,
    loader: ImageLoader,
}

impl SimulationService {
    pub fn new(config: AppConfig) -> Result<Self, LensError> {
        config.validate()?;
        let loader = ImageLoader::new(&config.loader)?;
        Ok(Self {
            config: Arc::new(config),
            loader,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Render parameters from the configuration's `defaults` block.
    pub fn default_params(&self) -> RenderParams {
        self.config.defaults
    }

    pub async fn load(&self, source: &ImageSource) -> Result<RasterBuffer, LensError> {
        self.loader.load(source).await
    }

    fn simulator(&self, params: &RenderParams) -> CvdSimulator {
        params
            .simulator()
            .stride(self.config.analysis.stride)
            .max_scatter_points(self.config.analysis.max_scatter_points)
            .dominant_options(self.config.dominant)
    }

    /// Adjust and simulate one preview.
    pub async fn render(
        &self,
        raster: Arc<RasterBuffer>,
        params: RenderParams,
    ) -> Result<RasterBuffer, LensError> {
        params.validate()?;
        let simulator = self.simulator(&params);
        tracing::debug!(
            width = raster.width(),
            height = raster.height(),
            deficiency = %params.deficiency,
            intensity = params.intensity.percent(),
            "Rendering preview"
        );
        let output = tokio::task::spawn_blocking(move || simulator.simulate(&raster)).await??;
        Ok(output)
    }

    /// Render every deficiency type with the same intensity and adjustment.
    ///
    /// The panels are rendered concurrently and returned in
    /// [`DeficiencyType::ALL`] order.
    pub async fn render_grid(
        &self,
        raster: Arc<RasterBuffer>,
        params: RenderParams,
    ) -> Result<Vec<GridCell>, LensError> {
        params.validate()?;
        tracing::debug!(
            width = raster.width(),
            height = raster.height(),
            panels = DeficiencyType::ALL.len(),
            "Rendering grid"
        );

        let handles = DeficiencyType::ALL.into_iter().map(|deficiency| {
            let simulator = self.simulator(&params.for_deficiency(deficiency));
            let raster = raster.clone();
            tokio::task::spawn_blocking(move || {
                simulator
                    .simulate(&raster)
                    .map(|raster| GridCell { deficiency, raster })
            })
        });

        try_join_all(handles)
            .await?
            .into_iter()
            .map(|cell| cell.map_err(LensError::from))
            .collect()
    }

    /// Variation statistics and dominant colours for one parameter set.
    pub async fn analyze(
        &self,
        raster: Arc<RasterBuffer>,
        params: RenderParams,
    ) -> Result<AnalysisReport, LensError> {
        params.validate()?;
        let simulator = self.simulator(&params);

        let report = tokio::task::spawn_blocking(move || {
            let rendered = simulator.simulate(&raster)?;
            let variation = simulator.analyze(&raster)?;
            let dominant_colors = simulator.dominant_colors(&rendered);
            Ok::<_, LensError>(AnalysisReport {
                params,
                variation,
                dominant_colors,
            })
        })
        .await??;

        tracing::debug!(
            sampled = report.variation.sampled_pixels,
            colors = report.dominant_colors.len(),
            "Analysis complete"
        );
        Ok(report)
    }

    /// Encode a rendered preview. `format` falls back to the configured
    /// default.
    pub async fn export(
        &self,
        raster: Arc<RasterBuffer>,
        deficiency: DeficiencyType,
        format: Option<ExportFormat>,
    ) -> Result<ExportedImage, LensError> {
        let format = format.unwrap_or(self.config.export.format);
        let quality = self.config.export.jpeg_quality;
        let bytes = tokio::task::spawn_blocking(move || encode(&raster, format, quality)).await??;
        Ok(ExportedImage {
            file_name: export_file_name(deficiency, format),
            format,
            bytes,
        })
    }
}
