use base64::Engine;
use cvd_sim::RasterBuffer;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::LensError;
use crate::models::LoaderConfig;

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    Url(String),
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Short description for logs; never includes inline bytes.
    pub fn describe(&self) -> String {
        match self {
            ImageSource::File(path) => format!("file {}", path.display()),
            ImageSource::Url(url) => format!("url {url}"),
            ImageSource::Bytes(bytes) => format!("{} inline bytes", bytes.len()),
        }
    }
}

impl FromStr for ImageSource {
    type Err = LensError;

    /// `http(s)://` becomes a URL, `data:<mime>;base64,` is decoded inline,
    /// anything else is a file path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LensError::InvalidInput("empty image source".into()));
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(ImageSource::Url(s.to_string()));
        }
        if let Some(rest) = s.strip_prefix("data:") {
            return decode_data_url(rest).map(ImageSource::Bytes);
        }
        Ok(ImageSource::File(PathBuf::from(s)))
    }
}

/// Decode the part of a data URL after `data:`.
fn decode_data_url(rest: &str) -> Result<Vec<u8>, LensError> {
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| LensError::InvalidInput("data URL without payload".into()))?;

    let mime = meta.split(';').next().unwrap_or_default();
    if !mime.is_empty() && !mime.starts_with("image/") {
        return Err(LensError::InvalidInput(format!(
            "data URL is {mime}, not an image"
        )));
    }
    if !meta.split(';').any(|part| part == "base64") {
        return Err(LensError::InvalidInput(
            "only base64 data URLs are supported".into(),
        ));
    }

    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| LensError::InvalidInput(format!("invalid base64 in data URL: {e}")))
}

/// Decode any supported image format into an RGBA raster.
pub fn decode_image(bytes: &[u8]) -> Result<RasterBuffer, LensError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| {
        tracing::warn!(size = bytes.len(), %e, "Failed to decode image");
        LensError::Decode(e.to_string())
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(RasterBuffer::new(width, height, rgba.into_raw())?)
}

/// Fetches image bytes from files, URLs or memory and decodes them.
#[derive(Clone)]
pub struct ImageLoader {
    client: reqwest::Client,
    max_image_bytes: usize,
}

impl ImageLoader {
    pub fn new(config: &LoaderConfig) -> Result<Self, LensError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| LensError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            max_image_bytes: config.max_image_bytes,
        })
    }

    /// Load and decode. Decoding runs on the blocking pool.
    pub async fn load(&self, source: &ImageSource) -> Result<RasterBuffer, LensError> {
        let bytes = self.fetch_bytes(source).await?;
        let raster = tokio::task::spawn_blocking(move || decode_image(&bytes)).await??;
        tracing::debug!(
            source = %source.describe(),
            width = raster.width(),
            height = raster.height(),
            "Loaded image"
        );
        Ok(raster)
    }

    /// Raw encoded bytes, size-checked.
    pub async fn fetch_bytes(&self, source: &ImageSource) -> Result<Vec<u8>, LensError> {
        match source {
            ImageSource::File(path) => {
                let size = tokio::fs::metadata(path).await?.len() as usize;
                self.check_size(size)?;
                Ok(tokio::fs::read(path).await?)
            }
            ImageSource::Url(url) => self.fetch_url(url).await,
            ImageSource::Bytes(bytes) => {
                self.check_size(bytes.len())?;
                Ok(bytes.clone())
            }
        }
    }

    async fn fetch_url(&self, url: &str) -> Result<Vec<u8>, LensError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LensError::ResourceUnavailable(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LensError::ResourceUnavailable(format!(
                "{url}: HTTP {}",
                status.as_u16()
            )));
        }
        if let Some(length) = response.content_length() {
            self.check_size(length as usize)?;
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LensError::ResourceUnavailable(format!("{url}: {e}")))?;
        self.check_size(bytes.len())?;
        Ok(bytes.to_vec())
    }

    fn check_size(&self, size: usize) -> Result<(), LensError> {
        if size > self.max_image_bytes {
            return Err(LensError::ImageTooLarge {
                size,
                max: self.max_image_bytes,
            });
        }
        Ok(())
    }
}
