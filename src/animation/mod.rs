//! Frame generation and the per-tick advance transition

/// Frame values and per-mode frame rules
pub mod frame;
/// Animation state and advancement
pub mod state;

pub use frame::{Frame, build_frame, cell_index_for_step};
pub use state::{Advance, AnimationState};
