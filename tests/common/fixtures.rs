//! Test fixtures and constants.

use chromalens::models::AppConfig;
use chromalens::SimulationService;
use cvd_sim::{RasterBuffer, Rgba};
use std::io::Cursor;

/// Reference colours used across tests
pub mod colors {
    use cvd_sim::Rgba;

    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);
    pub const GRAY: Rgba = Rgba::opaque(128, 128, 128);

    /// Pure red under full protanopia
    pub const RED_PROTANOPIA: Rgba = Rgba::opaque(145, 142, 0);
}

/// Four vertical stripes: red, green, blue, gray.
pub fn stripes(width: u32, height: u32) -> RasterBuffer {
    let palette = [colors::RED, colors::GREEN, colors::BLUE, colors::GRAY];
    let pixels: Vec<Rgba> = (0..height)
        .flat_map(|_| (0..width).map(|x| palette[(x * 4 / width) as usize]))
        .collect();
    RasterBuffer::from_pixels(width, height, &pixels).expect("valid stripe raster")
}

/// Smooth gradient with varying alpha.
pub fn gradient(width: u32, height: u32) -> RasterBuffer {
    let x_span = (width - 1).max(1);
    let y_span = (height - 1).max(1);
    let pixels: Vec<Rgba> = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                Rgba::new(
                    (x * 255 / x_span) as u8,
                    (y * 255 / y_span) as u8,
                    ((x + y) % 256) as u8,
                    (255 - (x % 64)) as u8,
                )
            })
        })
        .collect();
    RasterBuffer::from_pixels(width, height, &pixels).expect("valid gradient raster")
}

/// Encode a raster as PNG with the `image` crate.
pub fn png_bytes(raster: &RasterBuffer) -> Vec<u8> {
    let buffer =
        image::RgbaImage::from_raw(raster.width(), raster.height(), raster.as_bytes().to_vec())
            .expect("buffer matches dimensions");
    let mut out = Cursor::new(Vec::new());
    buffer
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("PNG encoding");
    out.into_inner()
}

/// Service with default configuration.
pub fn service() -> SimulationService {
    SimulationService::new(AppConfig::default()).expect("default config is valid")
}

/// Service with a custom YAML configuration.
pub fn service_with_yaml(yaml: &str) -> SimulationService {
    let config = AppConfig::from_yaml_str(yaml).expect("test config parses");
    SimulationService::new(config).expect("test config is valid")
}
