//! Built-in color themes ("flags")
//!
//! A flag is either the procedural rainbow or an ordered cycle of stripe
//! colors blended into each other around the phase circle. Every flag also
//! carries a cycle of 8-bit terminal color codes used as a fallback when
//! truecolor output is not requested.

mod builtin;

pub use builtin::FLAGS;

use std::f64::consts::TAU;

use crate::color::{self, Rgb};

/// How a flag produces colors along the gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlagStyle {
    /// Closed-form sinusoidal rainbow
    Rainbow,
    /// Piecewise interpolation around an ordered cycle of stripe colors.
    /// The last stripe blends back into the first.
    Stripes {
        colors: &'static [Rgb],
        /// Power-law easing exponent; higher values give sharper stripes
        factor: f64,
    },
}

impl FlagStyle {
    /// Map a phase angle to a color.
    ///
    /// `theta` is normalized into `[0, 2pi)` first, so the mapping is
    /// periodic. Must be finite.
    pub fn color_at(&self, theta: f64) -> Rgb {
        let theta = color::normalize_angle(theta);
        match *self {
            FlagStyle::Rainbow => color::rainbow(theta),
            FlagStyle::Stripes { colors, factor } => {
                let count = colors.len();
                let arc = TAU / count as f64;
                // guard the i == count edge when theta rounds up to 2pi
                let i = ((theta / arc) as usize).min(count - 1);
                let balance = 1.0 - (theta - i as f64 * arc) / arc;
                color::blend(colors[i], colors[(i + 1) % count], balance, factor)
            },
        }
    }
}

/// A named color theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flag {
    /// Name accepted by `-f/--flag`
    pub name: &'static str,
    /// Gradient definition
    pub style: FlagStyle,
    /// 256-color fallback cycle for indexed output
    pub ansi_codes: &'static [u8],
}

impl Flag {
    /// Map a phase angle to this flag's color at that angle
    pub fn color_at(&self, theta: f64) -> Rgb {
        self.style.color_at(theta)
    }
}

/// Error type for flag lookup
#[derive(Debug, thiserror::Error)]
pub enum FlagError {
    #[error("no flag with index {0}, run --help for the list")]
    UnknownIndex(usize),

    #[error("no flag named \"{0}\", run --help for the list")]
    UnknownName(String),
}

/// Look up a flag by its ordinal index
pub fn by_index(index: usize) -> Result<&'static Flag, FlagError> {
    FLAGS.get(index).ok_or(FlagError::UnknownIndex(index))
}

/// Look up a flag by name
pub fn by_name(name: &str) -> Result<&'static Flag, FlagError> {
    FLAGS
        .iter()
        .find(|flag| flag.name == name)
        .ok_or_else(|| FlagError::UnknownName(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_invariants() {
        assert!(!FLAGS.is_empty());
        for flag in FLAGS {
            assert!(!flag.name.is_empty());
            assert!(!flag.ansi_codes.is_empty(), "{} has no fallback codes", flag.name);
            if let FlagStyle::Stripes { colors, factor } = flag.style {
                assert!(!colors.is_empty(), "{} has no stripe colors", flag.name);
                assert!(factor > 0.0, "{} has a non-positive factor", flag.name);
            }
        }
    }

    #[test]
    fn test_lookup_by_index() {
        assert_eq!(by_index(0).unwrap().name, "rainbow");
        assert!(matches!(by_index(FLAGS.len()), Err(FlagError::UnknownIndex(_))));
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(by_name("transgender").unwrap().name, "transgender");
        assert!(matches!(by_name("plaid"), Err(FlagError::UnknownName(_))));
    }

    #[test]
    fn test_stripe_boundaries_hit_anchors() {
        // at the start of stripe i the blend weight is exactly 1.0,
        // which must reproduce stripe color i
        for flag in FLAGS {
            if let FlagStyle::Stripes { colors, .. } = flag.style {
                let arc = TAU / colors.len() as f64;
                for (i, &anchor) in colors.iter().enumerate() {
                    let rgb = flag.color_at(i as f64 * arc);
                    assert!(
                        (i32::from(rgb.r) - i32::from(anchor.r)).abs() <= 1
                            && (i32::from(rgb.g) - i32::from(anchor.g)).abs() <= 1
                            && (i32::from(rgb.b) - i32::from(anchor.b)).abs() <= 1,
                        "{} stripe {i}: {rgb:?} != {anchor:?}",
                        flag.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_color_at_periodic() {
        for flag in FLAGS {
            let a = flag.color_at(1.0);
            let b = flag.color_at(1.0 + TAU);
            assert_eq!(a, b, "{} is not periodic", flag.name);
        }
    }

    #[test]
    fn test_last_stripe_wraps_to_first() {
        let flag = by_name("pansexual").unwrap();
        if let FlagStyle::Stripes { colors, .. } = flag.style {
            // just below 2pi the blend is almost entirely the first color again
            let rgb = flag.color_at(TAU - 1e-6);
            let first = colors[0];
            assert!((i32::from(rgb.r) - i32::from(first.r)).abs() <= 1);
            assert!((i32::from(rgb.g) - i32::from(first.g)).abs() <= 1);
            assert!((i32::from(rgb.b) - i32::from(first.b)).abs() <= 1);
        } else {
            panic!("pansexual should be stripe-based");
        }
    }
}
