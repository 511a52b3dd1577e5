//! Assertion helpers for tests.

use cvd_sim::RasterBuffer;
use pretty_assertions::assert_eq;

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert bytes start with the JPEG SOI marker
pub fn assert_jpeg(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0xFF, 0xD8, 0xFF]),
        "Expected JPEG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..3.min(bytes.len())]
    );
}

/// Assert every pixel keeps its alpha value
pub fn assert_alpha_preserved(before: &RasterBuffer, after: &RasterBuffer) {
    assert_eq!(before.dimensions(), after.dimensions());
    for (i, (a, b)) in before.pixels().zip(after.pixels()).enumerate() {
        assert_eq!(a.a, b.a, "alpha changed at pixel {i}");
    }
}

/// Assert two rasters differ in at least one colour channel
pub fn assert_changed(before: &RasterBuffer, after: &RasterBuffer) {
    assert!(
        before.as_bytes() != after.as_bytes(),
        "Expected raster to change"
    );
}
