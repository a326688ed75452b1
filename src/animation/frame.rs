//! Frame construction from configuration and animation state
//!
//! A frame is rebuilt from scratch on every tick and returned by value. The
//! physical cells are laid out row-major in one flat line; only the walk order
//! of column-major modes reinterprets the step as a position in the logical grid.

use crate::animation::state::AnimationState;
use crate::io::configuration::Config;
use crate::pattern::mask::{DotMask, dash_mask};
use crate::pattern::mode::{Pattern, WalkOrder};
use crate::pattern::random::MaskRng;
use std::fmt;

/// One flat line of cell masks, `total_cells` long
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    cells: Vec<DotMask>,
}

impl Frame {
    /// Every cell blank
    pub fn blank(total_cells: usize) -> Self {
        Self {
            cells: vec![DotMask::BLANK; total_cells],
        }
    }

    /// Blank except for `mask` at `cell_index`
    ///
    /// An index past the end yields an all-blank frame.
    pub fn single(total_cells: usize, cell_index: usize, mask: DotMask) -> Self {
        let mut frame = Self::blank(total_cells);
        if let Some(cell) = frame.cells.get_mut(cell_index) {
            *cell = mask;
        }
        frame
    }

    /// Cell masks in physical order
    pub const fn cells(&self) -> &[DotMask] {
        self.cells.as_slice()
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the frame has no cells at all
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether every cell is blank
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_blank())
    }

    /// Indices of cells with at least one raised dot
    pub fn lit_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_blank())
            .map(|(index, _)| index)
            .collect()
    }

    /// Render as braille glyphs, one per cell
    pub fn to_glyphs(&self) -> String {
        self.cells.iter().map(|cell| cell.glyph()).collect()
    }
}

impl FromIterator<DotMask> for Frame {
    fn from_iter<I: IntoIterator<Item = DotMask>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_glyphs())
    }
}

/// Physical cell index visited at walking `step`
///
/// Row-major modes use the step as-is. Column-major walks read the step as
/// `(col = step / rows, row = step % rows)` and map that back to
/// `row × columns + col`, so a 3×2 grid is visited `0, 3, 1, 4, 2, 5`.
pub const fn cell_index_for_step(config: &Config, step: usize) -> usize {
    match config.mode().walk_order() {
        WalkOrder::RowMajor => step,
        WalkOrder::ColumnMajor => {
            let rows = config.rows();
            let columns = config.columns();
            let col = step / rows;
            let row = step % rows;
            // Steps past the grid stay on the last column
            let col = if col >= columns { columns - 1 } else { col };
            row * columns + col
        }
    }
}

/// Build the frame shown for the current tick
///
/// OFF phases are blank, except random groupings without whole-line blinking,
/// which ignore the phase and sprinkle a fresh set of cells every tick.
pub fn build_frame(config: &Config, state: &AnimationState, rng: &mut MaskRng) -> Frame {
    let total_cells = config.total_cells();
    let pattern = config.mode().pattern();

    if pattern == Pattern::Random && !config.whole_line() {
        return (0..total_cells).map(|_| rng.sparse_mask()).collect();
    }

    if !state.phase_on() {
        return Frame::blank(total_cells);
    }

    if config.whole_line() {
        return (0..total_cells)
            .map(|cell_index| lit_mask(pattern, cell_index, state.dash_sub_step(), rng))
            .collect();
    }

    let cell_index = cell_index_for_step(config, state.step_index());
    let mask = lit_mask(pattern, cell_index, state.dash_sub_step(), rng);
    Frame::single(total_cells, cell_index, mask)
}

// Mask a lit cell shows during the ON phase
fn lit_mask(
    pattern: Pattern,
    cell_index: usize,
    dash_sub_step: usize,
    rng: &mut MaskRng,
) -> DotMask {
    match pattern {
        Pattern::Fixed { mask, .. } => mask,
        Pattern::DashCycle => dash_mask(dash_sub_step),
        Pattern::Alternating { even, odd } => {
            if cell_index % 2 == 0 {
                even
            } else {
                odd
            }
        }
        Pattern::Random => rng.non_blank_mask(),
    }
}
