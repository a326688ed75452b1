//! Eight-dot cell masks and their braille glyphs
//!
//! Bit `k` of a mask raises dot `k + 1`. The glyph for a mask is the code
//! point `U+2800 + mask`, so every one of the 256 masks has exactly one glyph
//! and the empty mask is the blank cell.

use crate::io::configuration::{BRAILLE_BASE, DASH_CYCLE_LEN};
use std::fmt;

/// Raised-dot pattern of a single braille cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DotMask(u8);

impl DotMask {
    /// No dots raised
    pub const BLANK: Self = Self(0x00);
    /// Dots 1 through 8
    pub const ALL: Self = Self(0xFF);
    /// Dots 1-4
    pub const DOTS_14: Self = Self::from_dots(&[1, 4]);
    /// Dots 2-5
    pub const DOTS_25: Self = Self::from_dots(&[2, 5]);
    /// Dots 3-6
    pub const DOTS_36: Self = Self::from_dots(&[3, 6]);
    /// Dots 7-8
    pub const DOTS_78: Self = Self::from_dots(&[7, 8]);
    /// Dots 1-2-3-7, the left column
    pub const DOTS_1237: Self = Self::from_dots(&[1, 2, 3, 7]);
    /// Dots 4-5-6-8, the right column
    pub const DOTS_4568: Self = Self::from_dots(&[4, 5, 6, 8]);

    /// Wrap a raw mask value
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Build a mask from 1-based dot numbers
    ///
    /// Numbers outside `1..=8` are ignored.
    pub const fn from_dots(dots: &[u8]) -> Self {
        let mut bits = 0u8;
        let mut rest = dots;
        while let [dot, tail @ ..] = rest {
            if *dot >= 1 && *dot <= 8 {
                bits |= 1 << (*dot - 1);
            }
            rest = tail;
        }
        Self(bits)
    }

    /// Raw mask value
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether 1-based `dot` is raised
    pub const fn is_raised(self, dot: u8) -> bool {
        dot >= 1 && dot <= 8 && self.0 & (1 << (dot - 1)) != 0
    }

    /// Whether no dot is raised
    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }

    /// Number of raised dots
    pub const fn raised_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Glyph from the braille patterns block
    pub fn glyph(self) -> char {
        // Every offset in 0..=255 lands inside the block
        char::from_u32(BRAILLE_BASE + u32::from(self.0)).unwrap_or(BLANK_GLYPH)
    }
}

impl From<u8> for DotMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl fmt::Display for DotMask {
    /// Dot numbers joined by dashes, e.g. `1-2-3-7`, or `blank`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            return write!(f, "blank");
        }
        let mut first = true;
        for dot in 1..=8u8 {
            if self.is_raised(dot) {
                if !first {
                    write!(f, "-")?;
                }
                write!(f, "{dot}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Glyph of the blank cell, `U+2800`
pub const BLANK_GLYPH: char = '\u{2800}';

/// Dash rotation shown by the dashes-cycle mode, in order
pub const DASH_CYCLE: [DotMask; DASH_CYCLE_LEN] = [
    DotMask::DOTS_14,
    DotMask::DOTS_25,
    DotMask::DOTS_36,
    DotMask::DOTS_78,
];

/// Mask for a dash rotation sub-step, wrapping past the last one
pub const fn dash_mask(sub_step: usize) -> DotMask {
    match sub_step % DASH_CYCLE_LEN {
        0 => DotMask::DOTS_14,
        1 => DotMask::DOTS_25,
        2 => DotMask::DOTS_36,
        _ => DotMask::DOTS_78,
    }
}
