//! CIE L\*a\*b\* color space
//!
//! The conversion chain is sRGB → linear RGB → CIE XYZ (D65) → L\*a\*b\* and
//! back. The forward direction decodes gamma with the sRGB piecewise curve;
//! the cube-root/linear split of the LAB companding function sits at
//! δ³ where δ = 6/29.
//!
//! # References
//!
//! IEC 61966-2-1 (sRGB), CIE 15:2004 (colorimetry).

use super::lut::{linear_to_srgb, srgb_to_linear};
use super::rgb::Rgb;

/// D65 reference white, Y normalised to 1.0.
const WHITE_X: f32 = 0.950_47;
const WHITE_Y: f32 = 1.0;
const WHITE_Z: f32 = 1.088_83;

/// δ = 6/29
const DELTA: f32 = 6.0 / 29.0;

/// Linear sRGB → XYZ (D65), row-major.
const RGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192_0, 0.950_304_1],
];

/// XYZ (D65) → linear sRGB, row-major.
const XYZ_TO_RGB: [[f32; 3]; 3] = [
    [3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266_0, 1.876_010_8, 0.041_556_0],
    [0.055_643_4, -0.204_025_9, 1.057_225_2],
];

/// A color in CIE L\*a\*b\* space.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (diffuse white)
/// - `a`: Green-red axis, unbounded (about -86..98 for sRGB colors)
/// - `b`: Blue-yellow axis, unbounded (about -108..94 for sRGB colors)
///
/// Shifted values may fall outside the sRGB gamut; [`lab_to_rgb`] clamps
/// when converting back.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

#[inline]
fn mul(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// LAB companding function f(t).
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Inverse of [`lab_f`].
#[inline]
fn lab_f_inv(t: f32) -> f32 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// Convert sRGB channels (0.0..=255.0) to CIE L\*a\*b\*.
///
/// # Example
/// ```
/// use cvd_sim::rgb_to_lab;
/// let white = rgb_to_lab(255.0, 255.0, 255.0);
/// assert!((white.l - 100.0).abs() < 0.01);
/// assert!(white.a.abs() < 0.01 && white.b.abs() < 0.01);
/// ```
pub fn rgb_to_lab(r: f32, g: f32, b: f32) -> Lab {
    let linear = [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)];
    let [x, y, z] = mul(&RGB_TO_XYZ, linear);

    let fx = lab_f(x / WHITE_X);
    let fy = lab_f(y / WHITE_Y);
    let fz = lab_f(z / WHITE_Z);

    Lab {
        l: (116.0 * fy - 16.0).clamp(0.0, 100.0),
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert CIE L\*a\*b\* back to sRGB channels (0.0..=255.0), rounded to
/// the nearest integer.
///
/// Colors outside the sRGB gamut are clamped in linear light before gamma
/// encoding, so the result is always within 0.0..=255.0 and never NaN for
/// finite input.
pub fn lab_to_rgb(l: f32, a: f32, b: f32) -> Rgb {
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let xyz = [
        WHITE_X * lab_f_inv(fx),
        WHITE_Y * lab_f_inv(fy),
        WHITE_Z * lab_f_inv(fz),
    ];
    let [r, g, b] = mul(&XYZ_TO_RGB, xyz);

    let rgb = Rgb::new(
        linear_to_srgb(r).round(),
        linear_to_srgb(g).round(),
        linear_to_srgb(b).round(),
    );
    debug_assert!(rgb.is_finite(), "lab_to_rgb produced non-finite {rgb:?}");
    rgb
}

impl From<Rgb> for Lab {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        rgb_to_lab(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Lab> for Rgb {
    #[inline]
    fn from(lab: Lab) -> Self {
        lab_to_rgb(lab.l, lab.a, lab.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::to_u8_channel;

    /// Tolerance against the palette crate (different matrix precision)
    const PALETTE_TOLERANCE: f32 = 0.05;

    #[test]
    fn test_black_and_white() {
        let black = rgb_to_lab(0.0, 0.0, 0.0);
        assert!(black.l.abs() < 1e-4);
        let white = rgb_to_lab(255.0, 255.0, 255.0);
        assert!((white.l - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_lab_matches_palette_crate() {
        use palette::{IntoColor, Lab as PaletteLab, Srgb};

        let test_colors = [
            (255u8, 0u8, 0u8),
            (0, 255, 0),
            (0, 0, 255),
            (128, 128, 128),
            (255, 128, 0),
            (12, 200, 180),
        ];

        for (r, g, b) in test_colors {
            let ours = rgb_to_lab(r as f32, g as f32, b as f32);
            let theirs: PaletteLab = Srgb::new(r, g, b).into_format::<f32>().into_color();

            assert!(
                (ours.l - theirs.l).abs() < PALETTE_TOLERANCE,
                "L mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.l,
                theirs.l
            );
            assert!(
                (ours.a - theirs.a).abs() < PALETTE_TOLERANCE * 4.0,
                "a mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.a,
                theirs.a
            );
            assert!(
                (ours.b - theirs.b).abs() < PALETTE_TOLERANCE * 4.0,
                "b mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.b,
                theirs.b
            );
        }
    }

    #[test]
    fn test_round_trip_within_one() {
        for r in (0..=255u32).step_by(5) {
            for g in (0..=255u32).step_by(5) {
                for b in (0..=255u32).step_by(5) {
                    let lab = rgb_to_lab(r as f32, g as f32, b as f32);
                    let back = Rgb::from(lab);
                    let out = [
                        to_u8_channel(back.r),
                        to_u8_channel(back.g),
                        to_u8_channel(back.b),
                    ];
                    for (o, i) in out.iter().zip([r, g, b]) {
                        assert!(
                            (*o as i32 - i as i32).abs() <= 1,
                            "LAB round trip ({r},{g},{b}) -> {out:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_extreme_lab_clamps() {
        for (l, a, b) in [
            (100.0, 500.0, -500.0),
            (0.0, -500.0, 500.0),
            (50.0, 128.0, 128.0),
            (100.0, -128.0, -128.0),
            (0.0, 0.0, 0.0),
        ] {
            let rgb = lab_to_rgb(l, a, b);
            for c in rgb.to_array() {
                assert!(
                    c.is_finite() && (0.0..=255.0).contains(&c) && c == c.round(),
                    "lab ({l},{a},{b}) -> {rgb:?}"
                );
            }
        }
    }
}
