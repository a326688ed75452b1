//! Dot masks and the calibration pattern catalogue

/// Eight-dot masks and braille glyph mapping
pub mod mask;
/// Pattern modes and their frame rules
pub mod mode;
/// Session-owned random mask generation
pub mod random;

pub use mask::DotMask;
pub use mode::{Mode, Pattern, WalkOrder};
pub use random::MaskRng;
