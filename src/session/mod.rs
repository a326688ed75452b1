//! Session lifecycle and the seams to timers and displays

/// Lifecycle state machine
pub mod machine;
/// Frame and status output seam
pub mod presenter;
/// Periodic tick sources
pub mod tick;

pub use machine::{Session, SessionStatus};
pub use presenter::{FrameLog, Presenter};
pub use tick::{IntervalTicks, ManualTicks, TickSource};
