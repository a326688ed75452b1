//! In-place terminal display of the braille line and status text

use crate::animation::frame::Frame;
use crate::io::configuration::KEY_HINTS;
use crate::io::image::FrameCapture;
use crate::session::presenter::Presenter;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{IsTerminal, Write};
use std::sync::LazyLock;

static LINE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::with_template("{msg}").unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Presenter that redraws the braille line and status line on the terminal
///
/// On a terminal both lines are redrawn in place. When stdout is not a
/// terminal every frame and status is written as its own line instead, so
/// the output can be piped to a braille device or a log.
pub struct TerminalPresenter {
    frame_bar: ProgressBar,
    status_bar: Option<ProgressBar>,
    plain: bool,
    capture: Option<FrameCapture>,
}

impl TerminalPresenter {
    /// Presenter drawing to stdout; `quiet` hides status text
    pub fn new(quiet: bool) -> Self {
        let plain = !std::io::stdout().is_terminal();
        let target = if plain {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stdout()
        };
        let multi_progress = MultiProgress::with_draw_target(target);

        let frame_bar = multi_progress.add(Self::line_bar());
        let status_bar = (!quiet).then(|| multi_progress.add(Self::line_bar()));

        Self {
            frame_bar,
            status_bar,
            plain,
            capture: None,
        }
    }

    /// Record every frame shown for a later preview export
    pub fn enable_capture(&mut self, capture: FrameCapture) {
        self.capture = Some(capture);
    }

    /// Hand back the recorded frames, if capture was enabled
    pub const fn take_capture(&mut self) -> Option<FrameCapture> {
        self.capture.take()
    }

    /// Leave the last frame and status on screen
    pub fn finish(&self) {
        self.frame_bar.finish();
        if let Some(ref status_bar) = self.status_bar {
            status_bar.finish();
        }
    }

    fn line_bar() -> ProgressBar {
        let bar = ProgressBar::new_spinner();
        bar.set_style(LINE_STYLE.clone());
        bar
    }

    fn write_plain(line: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{line}");
    }
}

impl Presenter for TerminalPresenter {
    fn show_frame(&mut self, frame: &Frame) {
        if let Some(ref mut capture) = self.capture {
            capture.record(frame);
        }
        let glyphs = frame.to_glyphs();
        if self.plain {
            Self::write_plain(&glyphs);
        } else {
            self.frame_bar.set_message(glyphs);
        }
    }

    fn show_status(&mut self, status: &str) {
        let Some(ref status_bar) = self.status_bar else {
            return;
        };
        let line = format!("{status} {KEY_HINTS}");
        if self.plain {
            Self::write_plain(&line);
        } else {
            status_bar.set_message(line);
        }
    }
}
