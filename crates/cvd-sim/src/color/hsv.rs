//! HSV color space
//!
//! Hue is expressed in degrees (0.0..360.0), saturation and value in percent
//! (0.0..=100.0), matching the units of [`HsvShift`](crate::HsvShift).

use super::rgb::Rgb;

/// A color in HSV (hue, saturation, value) space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees, 0.0..360.0. Reported as 0.0 for achromatic colors.
    pub h: f32,
    /// Saturation in percent, 0.0..=100.0
    pub s: f32,
    /// Value in percent, 0.0..=100.0
    pub v: f32,
}

impl Hsv {
    #[inline]
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// Convert sRGB channels (0.0..=255.0) to HSV.
///
/// Uses the max/min channel hue-sector construction. When all channels are
/// equal the hue is undefined and reported as 0.0.
///
/// # Example
/// ```
/// use cvd_sim::rgb_to_hsv;
/// let hsv = rgb_to_hsv(0.0, 0.0, 255.0);
/// assert_eq!((hsv.h, hsv.s, hsv.v), (240.0, 100.0, 100.0));
/// ```
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let s = if max == 0.0 { 0.0 } else { delta / max };

    // rem_euclid can land exactly on 6.0 for tiny negative inputs
    let h = if h >= 360.0 { h - 360.0 } else { h };

    Hsv {
        h,
        s: s * 100.0,
        v: max * 100.0,
    }
}

/// Convert HSV back to sRGB channels (0.0..=255.0), rounded to the nearest
/// integer.
///
/// Hue is wrapped into 0.0..360.0; saturation and value are clamped to
/// 0.0..=100.0.
///
/// # Example
/// ```
/// use cvd_sim::{hsv_to_rgb, Rgb};
/// // 127.5, 95.625, 63.75 before rounding
/// assert_eq!(hsv_to_rgb(30.0, 50.0, 50.0), Rgb::new(128.0, 96.0, 64.0));
/// ```
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 100.0) / 100.0;
    let v = v.clamp(0.0, 100.0) / 100.0;

    let c = v * s;
    let sector = h / 60.0;
    let x = c * (1.0 - ((sector % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(
        ((r + m) * 255.0).round().clamp(0.0, 255.0),
        ((g + m) * 255.0).round().clamp(0.0, 255.0),
        ((b + m) * 255.0).round().clamp(0.0, 255.0),
    )
}

impl From<Rgb> for Hsv {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsv(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Hsv> for Rgb {
    #[inline]
    fn from(hsv: Hsv) -> Self {
        hsv_to_rgb(hsv.h, hsv.s, hsv.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::to_u8_channel;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_primaries() {
        let red = rgb_to_hsv(255.0, 0.0, 0.0);
        assert!(approx(red.h, 0.0) && approx(red.s, 100.0) && approx(red.v, 100.0));

        let green = rgb_to_hsv(0.0, 255.0, 0.0);
        assert!(approx(green.h, 120.0));

        let blue = rgb_to_hsv(0.0, 0.0, 255.0);
        assert!(approx(blue.h, 240.0));

        let magenta = rgb_to_hsv(255.0, 0.0, 255.0);
        assert!(approx(magenta.h, 300.0));
    }

    #[test]
    fn test_achromatic_reports_zero_hue() {
        for level in [0.0, 1.0, 128.0, 255.0] {
            let hsv = rgb_to_hsv(level, level, level);
            assert_eq!(hsv.h, 0.0);
            assert_eq!(hsv.s, 0.0);
        }
        assert_eq!(rgb_to_hsv(0.0, 0.0, 0.0).v, 0.0);
    }

    #[test]
    fn test_hue_range() {
        // Slightly more blue than green with red max: negative sector offset
        let hsv = rgb_to_hsv(255.0, 10.0, 11.0);
        assert!(hsv.h >= 0.0 && hsv.h < 360.0, "hue {} out of range", hsv.h);
        assert!(hsv.h > 359.0);
    }

    #[test]
    fn test_hsv_to_rgb_wraps_hue() {
        let a = hsv_to_rgb(-120.0, 100.0, 100.0);
        let b = hsv_to_rgb(240.0, 100.0, 100.0);
        assert_eq!(a, b);
        let c = hsv_to_rgb(360.0, 100.0, 100.0);
        assert_eq!(c, hsv_to_rgb(0.0, 100.0, 100.0));
    }

    #[test]
    fn test_hsv_to_rgb_returns_whole_channels() {
        for h in (0..360).step_by(7) {
            for s in (0..=100).step_by(9) {
                for v in (0..=100).step_by(11) {
                    let rgb = hsv_to_rgb(h as f32, s as f32, v as f32);
                    for c in rgb.to_array() {
                        assert_eq!(c, c.round(), "hsv ({h},{s},{v}) -> {rgb:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_trip_within_one() {
        for r in (0..=255u32).step_by(5) {
            for g in (0..=255u32).step_by(5) {
                for b in (0..=255u32).step_by(5) {
                    let hsv = rgb_to_hsv(r as f32, g as f32, b as f32);
                    let back = Rgb::from(hsv);
                    let out = [
                        to_u8_channel(back.r),
                        to_u8_channel(back.g),
                        to_u8_channel(back.b),
                    ];
                    for (o, i) in out.iter().zip([r, g, b]) {
                        assert!(
                            (*o as i32 - i as i32).abs() <= 1,
                            "HSV round trip ({r},{g},{b}) -> {out:?}"
                        );
                    }
                }
            }
        }
    }
}
