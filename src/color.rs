//! Color math for gradient generation
//!
//! Pure functions mapping a phase angle to an RGB triplet, either through
//! the closed-form sinusoidal rainbow or by blending between the stripe
//! colors of a flag.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from individual channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

/// Lightness floor for the procedural rainbow. Keeps every channel above
/// pure black so the gradient stays readable on dark backgrounds.
const RAINBOW_LIFT: f64 = 0.1;

/// Normalize an angle into `[0, 2pi)`.
///
/// Total for every finite input; `theta` must be finite (enforced upstream
/// by settings validation).
pub fn normalize_angle(theta: f64) -> f64 {
    debug_assert!(theta.is_finite(), "phase angle must be finite");
    let theta = theta.rem_euclid(TAU);
    // rem_euclid can land exactly on 2pi when the input is a tiny negative
    if theta >= TAU {
        0.0
    } else {
        theta
    }
}

/// Evaluate the closed-form rainbow at a normalized angle.
///
/// The three channels are the same sinusoid phase-shifted by a third of a
/// turn each.
pub fn rainbow(theta: f64) -> Rgb {
    let channel = |shift: f64| {
        let wave = 0.5 + 0.5 * (theta + shift).sin();
        let value = (RAINBOW_LIFT + (1.0 - RAINBOW_LIFT) * wave) * 255.0;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(channel(0.0), channel(2.0 * PI / 3.0), channel(4.0 * PI / 3.0))
}

/// Blend two stripe colors.
///
/// `balance` is 1.0 at the start of a stripe (pure `from`) and falls to 0.0
/// at its end (pure `to`). The power-law easing by `factor` sharpens the
/// transition near stripe boundaries instead of blending linearly.
pub fn blend(from: Rgb, to: Rgb, balance: f64, factor: f64) -> Rgb {
    let eased = balance.powf(factor);
    let mix = |a: u8, b: u8| {
        let value = f64::from(a) * eased + f64::from(b) * (1.0 - eased);
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex(0xffa0e0), Rgb::new(0xff, 0xa0, 0xe0));
        assert_eq!(Rgb::from_hex(0x000000), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::from_hex(0xffffff), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_normalize_angle_range() {
        for theta in [-10.0, -TAU, -0.5, 0.0, 0.5, TAU, TAU + 0.5, 100.0] {
            let normalized = normalize_angle(theta);
            assert!((0.0..TAU).contains(&normalized), "theta {theta} -> {normalized}");
        }
    }

    #[test]
    fn test_normalize_angle_periodic() {
        let a = normalize_angle(1.25);
        let b = normalize_angle(1.25 + TAU);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_blend_endpoints() {
        let from = Rgb::from_hex(0xff0000);
        let to = Rgb::from_hex(0x0000ff);
        // balance 1.0 is the stripe start: pure `from`
        assert_eq!(blend(from, to, 1.0, 4.0), from);
        // balance 0.0 is the stripe end: pure `to`
        assert_eq!(blend(from, to, 0.0, 4.0), to);
    }

    #[test]
    fn test_blend_rounds_half_away_from_zero() {
        // 50% blend of 0 and 255 with factor 1.0 is 127.5, which rounds up
        let mixed = blend(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0), 0.5, 1.0);
        assert_eq!(mixed, Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_rainbow_lift_keeps_channels_off_the_floor() {
        // the 0.1 lift means no channel ever reaches pure black
        let mut theta = 0.0;
        while theta < TAU {
            let rgb = rainbow(theta);
            assert!(rgb.r >= 25 && rgb.g >= 25 && rgb.b >= 25, "dark channel at {theta}");
            theta += 0.01;
        }
    }

    #[test]
    fn test_rainbow_phase_shifted_channels() {
        // at theta 0 the red channel sits mid-wave, green above, blue below
        let rgb = rainbow(0.0);
        assert!(rgb.g > rgb.r);
        assert!(rgb.b < rgb.r);
    }
}
