//! Catalogue of calibration pattern modes
//!
//! Modes keep the index order front ends present them in, so an index chosen
//! from a list maps straight to a variant. Each mode resolves to a [`Pattern`]
//! that carries the mask or rule frame building and advancing dispatch on.

use crate::io::error::{CalibrationError, Result};
use crate::pattern::mask::DotMask;
use std::fmt;

/// Order in which the walking cell visits the logical grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkOrder {
    /// Left to right, then down
    RowMajor,
    /// Top to bottom, then right
    ColumnMajor,
}

/// Frame and advance rule of a mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// One mask for every lit cell
    Fixed {
        /// Mask shown on the ON phase
        mask: DotMask,
        /// Walk order over the grid
        order: WalkOrder,
    },
    /// Rotate 1-4, 2-5, 3-6, 7-8 before moving on
    DashCycle,
    /// Pick a mask by parity of the physical cell index
    Alternating {
        /// Mask for even cell indices
        even: DotMask,
        /// Mask for odd cell indices
        odd: DotMask,
    },
    /// Random non-empty masks drawn every frame
    Random,
}

/// Calibration pattern variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// All dots, walking row by row
    #[default]
    AllDotsRowMajor,
    /// All dots, walking column by column
    AllDotsColumnMajor,
    /// Random dot groupings
    RandomGroupings,
    /// Dash rotation 1-4 / 2-5 / 3-6 / 7-8
    DashesCycle,
    /// Dots 7-8
    Dots78,
    /// Dots 1-2-3-7
    Dots1237,
    /// Dots 4-5-6-8
    Dots4568,
    /// 1-2-3-7 on even cells, 4-5-6-8 on odd cells
    Alternate1237And4568,
    /// Dots 1-3-4-6
    Dots1346,
    /// Dots 1-2-5-6
    Dots1256,
    /// Dots 1-2-6-7
    Dots1267,
    /// Dots 3-4-7
    Dots347,
    /// Dots 1-2-3-6-7
    Dots12367,
    /// Dots 1-2-3-5-6
    Dots12356,
    /// Dots 3-6-7-8
    Dots3678,
}

impl Mode {
    /// Every mode, in index order
    pub const ALL: [Self; 15] = [
        Self::AllDotsRowMajor,
        Self::AllDotsColumnMajor,
        Self::RandomGroupings,
        Self::DashesCycle,
        Self::Dots78,
        Self::Dots1237,
        Self::Dots4568,
        Self::Alternate1237And4568,
        Self::Dots1346,
        Self::Dots1256,
        Self::Dots1267,
        Self::Dots347,
        Self::Dots12367,
        Self::Dots12356,
        Self::Dots3678,
    ];

    /// Look a mode up by its list index
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is past the end of [`Mode::ALL`]
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CalibrationError::UnknownMode {
                index,
                mode_count: Self::ALL.len(),
            })
    }

    /// Position of this mode in [`Mode::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name used in status text
    pub const fn label(self) -> &'static str {
        match self {
            Self::AllDotsRowMajor => "All dots (1-8), row-major walk",
            Self::AllDotsColumnMajor => "All dots (1-8), column-major walk",
            Self::RandomGroupings => "Random dot groupings",
            Self::DashesCycle => "Dashes cycle (1-4 / 2-5 / 3-6 / 7-8)",
            Self::Dots78 => "Dots 7-8",
            Self::Dots1237 => "Dots 1-2-3-7",
            Self::Dots4568 => "Dots 4-5-6-8",
            Self::Alternate1237And4568 => "Alternating 1237 / 4568",
            Self::Dots1346 => "Dots 1-3-4-6",
            Self::Dots1256 => "Dots 1-2-5-6",
            Self::Dots1267 => "Dots 1-2-6-7",
            Self::Dots347 => "Dots 3-4-7",
            Self::Dots12367 => "Dots 1-2-3-6-7",
            Self::Dots12356 => "Dots 1-2-3-5-6",
            Self::Dots3678 => "Dots 3-6-7-8",
        }
    }

    /// Frame and advance rule for this mode
    pub const fn pattern(self) -> Pattern {
        const fn row_major(mask: DotMask) -> Pattern {
            Pattern::Fixed {
                mask,
                order: WalkOrder::RowMajor,
            }
        }

        match self {
            Self::AllDotsRowMajor => row_major(DotMask::ALL),
            Self::AllDotsColumnMajor => Pattern::Fixed {
                mask: DotMask::ALL,
                order: WalkOrder::ColumnMajor,
            },
            Self::RandomGroupings => Pattern::Random,
            Self::DashesCycle => Pattern::DashCycle,
            Self::Dots78 => row_major(DotMask::DOTS_78),
            Self::Dots1237 => row_major(DotMask::DOTS_1237),
            Self::Dots4568 => row_major(DotMask::DOTS_4568),
            Self::Alternate1237And4568 => Pattern::Alternating {
                even: DotMask::DOTS_1237,
                odd: DotMask::DOTS_4568,
            },
            Self::Dots1346 => row_major(DotMask::from_dots(&[1, 3, 4, 6])),
            Self::Dots1256 => row_major(DotMask::from_dots(&[1, 2, 5, 6])),
            Self::Dots1267 => row_major(DotMask::from_dots(&[1, 2, 6, 7])),
            Self::Dots347 => row_major(DotMask::from_dots(&[3, 4, 7])),
            Self::Dots12367 => row_major(DotMask::from_dots(&[1, 2, 3, 6, 7])),
            Self::Dots12356 => row_major(DotMask::from_dots(&[1, 2, 3, 5, 6])),
            Self::Dots3678 => row_major(DotMask::from_dots(&[3, 6, 7, 8])),
        }
    }

    /// Walk order of the lit cell; row-major for everything but one mode
    pub const fn walk_order(self) -> WalkOrder {
        match self.pattern() {
            Pattern::Fixed { order, .. } => order,
            _ => WalkOrder::RowMajor,
        }
    }
}

impl TryFrom<usize> for Mode {
    type Error = CalibrationError;

    fn try_from(index: usize) -> Result<Self> {
        Self::from_index(index)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
