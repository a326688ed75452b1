//! Calibration constants, run settings and configuration validation

use crate::io::error::{CalibrationError, Result, invalid_parameter};
use crate::pattern::mode::Mode;
use std::time::Duration;

/// First code point of the Unicode braille patterns block (blank cell)
pub const BRAILLE_BASE: u32 = 0x2800;

// Safety limit to prevent runaway frame allocation
/// Maximum allowed `columns × rows`
pub const MAX_TOTAL_CELLS: usize = 5000;

/// Number of dots per braille cell
pub const DOTS_PER_CELL: usize = 8;

/// Number of masks in the dash rotation
pub const DASH_CYCLE_LEN: usize = 4;

/// Chance that a cell is filled on a random-groupings tick
pub const RANDOM_FILL_PROBABILITY: f64 = 0.35;

// Defaults match a common 24-cell, 4-line display
/// Default column count
pub const DEFAULT_COLUMNS: u32 = 24;
/// Default row count
pub const DEFAULT_ROWS: u32 = 4;
/// Default tick period in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 500;

// Terminal front end
/// Key reminder appended to status lines
pub const KEY_HINTS: &str = "Pause/resume: p or Enter. Stop: s or q.";
/// How long the run loop waits for input while no tick is scheduled
pub const COMMAND_POLL_INTERVAL_MS: u64 = 100;

// Preview rendering
/// Side length of a rendered dot in pixels
pub const PREVIEW_DOT_SIZE: u32 = 4;
/// Gap between dots inside a cell in pixels
pub const PREVIEW_DOT_GAP: u32 = 2;
/// Gap between neighbouring cells in pixels
pub const PREVIEW_CELL_GAP: u32 = 6;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;

/// Settings supplied by a front end before a run
///
/// Nothing here is trusted until [`Config::validate`] accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Cells per logical row
    pub columns: u32,
    /// Logical rows
    pub rows: u32,
    /// Tick period in milliseconds
    pub interval_ms: u64,
    /// Pattern variant
    pub mode: Mode,
    /// Restart after a full pass instead of stopping
    pub looping: bool,
    /// Blink every cell at once instead of walking one cell
    pub whole_line: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            interval_ms: DEFAULT_INTERVAL_MS,
            mode: Mode::AllDotsRowMajor,
            looping: true,
            whole_line: false,
        }
    }
}

/// Validated, frozen configuration for a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    columns: usize,
    rows: usize,
    total_cells: usize,
    interval: Duration,
    mode: Mode,
    looping: bool,
    whole_line: bool,
}

impl Config {
    /// Check every field of `settings` and freeze them
    ///
    /// All fields are checked before anything is built, so a rejection
    /// never leaves a partially applied configuration behind.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `columns`, `rows` or `interval_ms` is zero
    /// - `columns × rows` exceeds [`MAX_TOTAL_CELLS`]
    pub fn validate(settings: &Settings) -> Result<Self> {
        if settings.columns == 0 {
            return Err(invalid_parameter(
                "columns",
                &settings.columns,
                &"Columns must be a positive number",
            ));
        }
        if settings.rows == 0 {
            return Err(invalid_parameter(
                "rows",
                &settings.rows,
                &"Rows must be a positive number",
            ));
        }
        if settings.interval_ms == 0 {
            return Err(invalid_parameter(
                "interval_ms",
                &settings.interval_ms,
                &"Interval must be a positive number of milliseconds",
            ));
        }

        let total_cells = u64::from(settings.columns) * u64::from(settings.rows);
        if total_cells > MAX_TOTAL_CELLS as u64 {
            return Err(CalibrationError::GridTooLarge {
                columns: settings.columns,
                rows: settings.rows,
                max_cells: MAX_TOTAL_CELLS,
            });
        }

        Ok(Self {
            columns: settings.columns as usize,
            rows: settings.rows as usize,
            total_cells: total_cells as usize,
            interval: Duration::from_millis(settings.interval_ms),
            mode: settings.mode,
            looping: settings.looping,
            whole_line: settings.whole_line,
        })
    }

    /// Cells per logical row
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Logical rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Length of every frame, always `columns × rows`
    pub const fn total_cells(&self) -> usize {
        self.total_cells
    }

    /// Tick period
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Pattern variant
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the sequence restarts after a full pass
    pub const fn looping(&self) -> bool {
        self.looping
    }

    /// Whether every cell blinks at once
    pub const fn whole_line(&self) -> bool {
        self.whole_line
    }
}
