//! Encode rasters for download.

use cvd_sim::{DeficiencyType, RasterBuffer};
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

use crate::error::LensError;

/// Download format. `Jpeg` and `Jpg` encode identically and differ only in
/// the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
    Jpg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Jpg => "jpg",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg | ExportFormat::Jpg => "image/jpeg",
        }
    }

    /// Whether the encoded file keeps the alpha channel.
    pub fn keeps_alpha(self) -> bool {
        matches!(self, ExportFormat::Png)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpeg" => Ok(ExportFormat::Jpeg),
            "jpg" => Ok(ExportFormat::Jpg),
            other => Err(LensError::InvalidInput(format!(
                "unsupported export format: {other}"
            ))),
        }
    }
}

/// File name for an exported preview: `image-original.png`,
/// `image-protanopia.jpg`, ...
pub fn export_file_name(deficiency: DeficiencyType, format: ExportFormat) -> String {
    let stem = match deficiency {
        DeficiencyType::None => "original",
        other => other.name(),
    };
    format!("image-{stem}.{}", format.extension())
}

/// Encode a raster in the given format.
///
/// JPEG output drops alpha; `jpeg_quality` is ignored for PNG.
pub fn encode(
    raster: &RasterBuffer,
    format: ExportFormat,
    jpeg_quality: u8,
) -> Result<Vec<u8>, LensError> {
    let bytes = match format {
        ExportFormat::Png => encode_png(raster)?,
        ExportFormat::Jpeg | ExportFormat::Jpg => encode_jpeg(raster, jpeg_quality)?,
    };
    tracing::debug!(
        width = raster.width(),
        height = raster.height(),
        %format,
        size = bytes.len(),
        "Encoded export"
    );
    Ok(bytes)
}

fn encode_png(raster: &RasterBuffer) -> Result<Vec<u8>, LensError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, raster.width(), raster.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| LensError::Encode(e.to_string()))?;
        writer
            .write_image_data(raster.as_bytes())
            .map_err(|e| LensError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

fn encode_jpeg(raster: &RasterBuffer, quality: u8) -> Result<Vec<u8>, LensError> {
    let rgb: Vec<u8> = raster
        .pixels()
        .flat_map(|p| [p.r, p.g, p.b])
        .collect();

    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100))
        .encode(&rgb, raster.width(), raster.height(), ExtendedColorType::Rgb8)
        .map_err(|e| LensError::Encode(e.to_string()))?;
    Ok(buf)
}
