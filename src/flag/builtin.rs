//! The built-in flag table
//!
//! Ordinals are part of the CLI contract (`-f 3` always means lesbian), so
//! new flags go at the end. The 8-bit code cycles approximate each gradient
//! on terminals without truecolor support.

use super::{Flag, FlagStyle};
use crate::color::Rgb;

const TRANS_BLUE: Rgb = Rgb::from_hex(0xa0e0ff);
const TRANS_PINK: Rgb = Rgb::from_hex(0xffa0e0);
const TRANS_WHITE: Rgb = Rgb::from_hex(0xffffff);

const NB_YELLOW: Rgb = Rgb::from_hex(0xffff00);
const NB_WHITE: Rgb = Rgb::from_hex(0xffffff);
const NB_PURPLE: Rgb = Rgb::from_hex(0xb000ff);
const NB_BLACK: Rgb = Rgb::from_hex(0x000000);

const LESBIAN_RED: Rgb = Rgb::from_hex(0xff0000);
const LESBIAN_ORANGE: Rgb = Rgb::from_hex(0xff993f);
const LESBIAN_WHITE: Rgb = Rgb::from_hex(0xffffff);
const LESBIAN_PINK: Rgb = Rgb::from_hex(0xff8cbd);
const LESBIAN_PURPLE: Rgb = Rgb::from_hex(0xff4284);

const GAY_GREEN_1: Rgb = Rgb::from_hex(0x00b685);
const GAY_GREEN_2: Rgb = Rgb::from_hex(0x6bffb6);
const GAY_WHITE: Rgb = Rgb::from_hex(0xffffff);
const GAY_BLUE_1: Rgb = Rgb::from_hex(0x8be1ff);
const GAY_BLUE_2: Rgb = Rgb::from_hex(0x8e1ae1);

const PAN_PINK: Rgb = Rgb::from_hex(0xff3388);
const PAN_YELLOW: Rgb = Rgb::from_hex(0xffea00);
const PAN_BLUE: Rgb = Rgb::from_hex(0x00dbff);

const BI_PINK: Rgb = Rgb::from_hex(0xff3b7b);
const BI_PURPLE: Rgb = Rgb::from_hex(0xd06bcc);
const BI_BLUE: Rgb = Rgb::from_hex(0x3b72ff);

const FLUID_PINK: Rgb = Rgb::from_hex(0xffa0bc);
const FLUID_WHITE: Rgb = Rgb::from_hex(0xffffff);
const FLUID_PURPLE: Rgb = Rgb::from_hex(0xc600e4);
const FLUID_BLACK: Rgb = Rgb::from_hex(0x000000);
const FLUID_BLUE: Rgb = Rgb::from_hex(0x4e3cbb);

/// All built-in flags, indexed by ordinal
pub static FLAGS: &[Flag] = &[
    // 0: classic rainbow (procedural)
    Flag {
        name: "rainbow",
        style: FlagStyle::Rainbow,
        ansi_codes: &[
            39, 38, 44, 43, 49, 48, 84, 83, 119, 118, 154, 148, 184, 178, 214, 208, 209, 203,
            204, 198, 199, 163, 164, 128, 129, 93, 99, 63, 69, 33,
        ],
    },
    // 1: transgender
    Flag {
        name: "transgender",
        style: FlagStyle::Stripes {
            colors: &[TRANS_BLUE, TRANS_PINK, TRANS_WHITE, TRANS_PINK, TRANS_BLUE],
            factor: 4.0,
        },
        ansi_codes: &[117, 117, 225, 225, 255, 255, 225, 225, 117, 117],
    },
    // 2: nonbinary
    Flag {
        name: "nonbinary",
        style: FlagStyle::Stripes {
            colors: &[NB_YELLOW, NB_WHITE, NB_PURPLE, NB_BLACK],
            factor: 4.0,
        },
        ansi_codes: &[226, 226, 255, 255, 93, 93, 234, 234],
    },
    // 3: lesbian
    Flag {
        name: "lesbian",
        style: FlagStyle::Stripes {
            colors: &[
                LESBIAN_RED,
                LESBIAN_ORANGE,
                LESBIAN_WHITE,
                LESBIAN_PINK,
                LESBIAN_PURPLE,
            ],
            factor: 2.0,
        },
        ansi_codes: &[196, 208, 255, 170, 128],
    },
    // 4: gay (men-loving-men)
    Flag {
        name: "gay",
        style: FlagStyle::Stripes {
            colors: &[GAY_GREEN_1, GAY_GREEN_2, GAY_WHITE, GAY_BLUE_1, GAY_BLUE_2],
            factor: 6.0,
        },
        ansi_codes: &[36, 49, 121, 255, 117, 105, 92],
    },
    // 5: pansexual
    Flag {
        name: "pansexual",
        style: FlagStyle::Stripes {
            colors: &[PAN_PINK, PAN_YELLOW, PAN_BLUE],
            factor: 8.0,
        },
        ansi_codes: &[200, 200, 200, 227, 227, 227, 45, 45, 45],
    },
    // 6: bisexual. The doubled pink and blue stripes hold those colors
    // solid before blending through purple.
    Flag {
        name: "bisexual",
        style: FlagStyle::Stripes {
            colors: &[BI_PINK, BI_PINK, BI_PURPLE, BI_BLUE, BI_BLUE],
            factor: 4.0,
        },
        ansi_codes: &[162, 162, 162, 129, 129, 27, 27, 27],
    },
    // 7: genderfluid
    Flag {
        name: "genderfluid",
        style: FlagStyle::Stripes {
            colors: &[FLUID_PINK, FLUID_WHITE, FLUID_PURPLE, FLUID_BLACK, FLUID_BLUE],
            factor: 2.0,
        },
        ansi_codes: &[219, 219, 255, 255, 128, 128, 234, 234, 20, 20],
    },
];
