//! Output seam between a session and whatever displays it

use crate::animation::frame::Frame;

/// Receives frames and status text from a session
pub trait Presenter {
    /// Replace the displayed line with `frame`
    fn show_frame(&mut self, frame: &Frame);

    /// Replace the displayed status text
    fn show_status(&mut self, status: &str);
}

/// Presenter that keeps everything it is shown in memory
#[derive(Debug, Clone, Default)]
pub struct FrameLog {
    /// Frames in the order they were shown
    pub frames: Vec<Frame>,
    /// Status lines in the order they were shown
    pub statuses: Vec<String>,
}

impl FrameLog {
    /// Empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently shown frame
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Most recently shown status
    pub fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(String::as_str)
    }

    /// Forget everything shown so far
    pub fn clear(&mut self) {
        self.frames.clear();
        self.statuses.clear();
    }
}

impl Presenter for FrameLog {
    fn show_frame(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    fn show_status(&mut self, status: &str) {
        self.statuses.push(status.to_string());
    }
}
