//! Test pattern generator for calibrating multi-cell 8-dot braille displays
//!
//! A [`session::Session`] cycles a chosen dot pattern across every cell of a
//! display at a fixed interval, emitting each frame as one flat line of
//! braille glyphs. Patterns either walk one lit cell across the grid or blink
//! the whole line, and either loop forever or stop after a single pass.

#![forbid(unsafe_code)]

/// Frame building and the per-tick advance transition
pub mod animation;
/// Configuration intake, errors and the terminal front end
pub mod io;
/// Dot masks and the pattern mode catalogue
pub mod pattern;
/// Session lifecycle and its timer and display seams
pub mod session;

pub use io::error::{CalibrationError, Result};
