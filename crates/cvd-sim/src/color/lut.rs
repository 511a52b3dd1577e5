//! Gamma lookup table access functions
//!
//! The 8-bit decode table is generated at compile time by build.rs. Values
//! that fall between code values (fractional channels produced by the RGB
//! offset stage) use the exact IEC 61966-2-1 formula instead.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Decode an sRGB channel on the 0.0..=255.0 scale to linear light (0.0..=1.0).
///
/// Whole code values are served from the table; anything else is computed.
#[inline]
pub fn srgb_to_linear(channel: f32) -> f32 {
    let channel = channel.clamp(0.0, 255.0);
    if channel.fract() == 0.0 {
        return SRGB8_TO_LINEAR[channel as usize];
    }
    let srgb = channel / 255.0;
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode linear light to an sRGB channel on the 0.0..=255.0 scale.
///
/// Out-of-gamut input is clamped to 0.0..=1.0 first so the result can never
/// wrap or go negative.
#[inline]
pub fn linear_to_srgb(linear: f32) -> f32 {
    let linear = if linear.is_nan() {
        0.0
    } else {
        linear.clamp(0.0, 1.0)
    };
    let srgb = if linear <= 0.003_130_8 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    (srgb * 255.0).clamp(0.0, 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_to_linear_boundaries() {
        assert!(srgb_to_linear(0.0).abs() < 1e-6);
        assert!((srgb_to_linear(255.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_table_matches_formula() {
        for i in 0..=255u8 {
            let srgb = i as f32 / 255.0;
            let exact = if srgb <= 0.04045 {
                srgb / 12.92
            } else {
                ((srgb + 0.055) / 1.055).powf(2.4)
            };
            assert!(
                (SRGB8_TO_LINEAR[i as usize] - exact).abs() < 1e-6,
                "table entry {i} diverges from formula"
            );
        }
    }

    #[test]
    fn test_fractional_input_is_between_neighbours() {
        let low = srgb_to_linear(100.0);
        let mid = srgb_to_linear(100.5);
        let high = srgb_to_linear(101.0);
        assert!(low < mid && mid < high);
    }

    #[test]
    fn test_linear_to_srgb_clamps_out_of_gamut() {
        assert_eq!(linear_to_srgb(-0.5), 0.0);
        assert_eq!(linear_to_srgb(3.0), 255.0);
        assert_eq!(linear_to_srgb(f32::NAN), 0.0);
    }

    #[test]
    fn test_monotonicity() {
        let mut prev = srgb_to_linear(0.0);
        for i in 1..=2550 {
            let curr = srgb_to_linear(i as f32 / 10.0);
            assert!(curr >= prev, "srgb_to_linear not monotonic at {i}");
            prev = curr;
        }

        let mut prev = linear_to_srgb(0.0);
        for i in 1..=1000 {
            let curr = linear_to_srgb(i as f32 / 1000.0);
            assert!(curr >= prev, "linear_to_srgb not monotonic at {i}");
            prev = curr;
        }
    }
}
