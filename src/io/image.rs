//! Animated GIF preview of the frames a run displayed
//!
//! Frames are one flat line of cells; the preview wraps them `columns` cells
//! per row so the picture matches the physical display. Each cell is drawn as
//! two columns of four dots: 1, 2, 3, 7 down the left and 4, 5, 6, 8 down
//! the right.

use crate::animation::frame::Frame;
use crate::io::configuration::{
    PREVIEW_CELL_GAP, PREVIEW_DOT_GAP, PREVIEW_DOT_SIZE, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{CalibrationError, Result};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame as GifFrame, Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const RAISED: Rgba<u8> = Rgba([20, 20, 20, 255]);
const LOWERED: Rgba<u8> = Rgba([220, 220, 220, 255]);

/// (row, column) of dots 1 through 8 inside a cell
const DOT_POSITIONS: [(usize, usize); 8] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (0, 1),
    (1, 1),
    (2, 1),
    (3, 0),
    (3, 1),
];

/// Records displayed frames for a preview export
#[derive(Debug, Clone)]
pub struct FrameCapture {
    frames: Vec<Frame>,
    columns: usize,
    delay_ms: u32,
}

impl FrameCapture {
    /// Capture laid out `columns` cells wide, one frame per `interval_ms`
    pub fn new(columns: u32, interval_ms: u64) -> Self {
        Self {
            frames: Vec::new(),
            columns: (columns as usize).max(1),
            delay_ms: u32::try_from(interval_ms).unwrap_or(u32::MAX),
        }
    }

    /// Append a displayed frame
    pub fn record(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    /// Number of recorded frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the recorded frames as a looping GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were recorded
    /// - The parent directory or file cannot be created
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path) -> Result<()> {
        if self.frames.is_empty() {
            return Err(CalibrationError::NothingCaptured);
        }

        let delay_ms = self.delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let frames: Vec<GifFrame> = self
            .frames
            .iter()
            .map(|frame| {
                GifFrame::from_parts(
                    render_frame(&dot_raster(frame, self.columns)),
                    0,
                    0,
                    Delay::from_numer_denom_ms(delay_ms, 1),
                )
            })
            .collect();

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CalibrationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| CalibrationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let export_error = |e: image::ImageError| CalibrationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
        encoder.encode_frames(frames).map_err(export_error)?;

        Ok(())
    }
}

/// Raised state of every dot, shaped `(4 × cell rows, 2 × columns)`
pub fn dot_raster(frame: &Frame, columns: usize) -> Array2<bool> {
    let columns = columns.max(1);
    let cell_rows = frame.len().div_ceil(columns).max(1);
    let mut raster = Array2::from_elem((cell_rows * 4, columns * 2), false);

    for (index, cell) in frame.cells().iter().enumerate() {
        let (cell_row, cell_col) = (index / columns, index % columns);
        for (dot, &(row, col)) in (1..=8u8).zip(DOT_POSITIONS.iter()) {
            if let Some(raised) = raster.get_mut([cell_row * 4 + row, cell_col * 2 + col]) {
                *raised = cell.is_raised(dot);
            }
        }
    }
    raster
}

fn render_frame(raster: &Array2<bool>) -> RgbaImage {
    let (dot_rows, dot_cols) = raster.dim();
    let pitch = PREVIEW_DOT_SIZE + PREVIEW_DOT_GAP;
    let cell_width = 2 * PREVIEW_DOT_SIZE + PREVIEW_DOT_GAP;
    let cell_height = 4 * PREVIEW_DOT_SIZE + 3 * PREVIEW_DOT_GAP;
    let cell_cols = (dot_cols / 2) as u32;
    let cell_rows = (dot_rows / 4) as u32;

    let width = cell_cols * (cell_width + PREVIEW_CELL_GAP) + PREVIEW_CELL_GAP;
    let height = cell_rows * (cell_height + PREVIEW_CELL_GAP) + PREVIEW_CELL_GAP;
    let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);

    for ((row, col), &raised) in raster.indexed_iter() {
        let (row, col) = (row as u32, col as u32);
        let x0 = PREVIEW_CELL_GAP + (col / 2) * (cell_width + PREVIEW_CELL_GAP) + (col % 2) * pitch;
        let y0 =
            PREVIEW_CELL_GAP + (row / 4) * (cell_height + PREVIEW_CELL_GAP) + (row % 4) * pitch;
        let color = if raised { RAISED } else { LOWERED };

        for y in y0..y0 + PREVIEW_DOT_SIZE {
            for x in x0..x0 + PREVIEW_DOT_SIZE {
                img.put_pixel(x, y, color);
            }
        }
    }
    img
}
