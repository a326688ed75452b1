//! Tests for the terminal presenter

#[cfg(test)]
mod tests {
    use braille_calibrate::animation::frame::Frame;
    use braille_calibrate::io::image::FrameCapture;
    use braille_calibrate::io::progress::TerminalPresenter;
    use braille_calibrate::pattern::mask::DotMask;
    use braille_calibrate::session::presenter::Presenter;

    // Tests frames reach the capture when enabled
    // Verified by recording only on status updates
    #[test]
    fn test_capture_records_frames() {
        let mut presenter = TerminalPresenter::new(true);
        presenter.enable_capture(FrameCapture::new(4, 100));

        presenter.show_frame(&Frame::single(4, 2, DotMask::ALL));
        presenter.show_status("Status: Idle.");
        presenter.show_frame(&Frame::blank(4));
        presenter.finish();

        let capture = presenter.take_capture().expect("capture enabled");
        assert_eq!(capture.frame_count(), 2);
        assert!(presenter.take_capture().is_none());
    }

    // Tests a presenter without capture still accepts output
    // Verified by panicking when no status bar exists
    #[test]
    fn test_presenter_without_capture() {
        let mut presenter = TerminalPresenter::new(false);
        presenter.show_frame(&Frame::blank(2));
        presenter.show_status("Status: Idle.");
        presenter.finish();
        assert!(presenter.take_capture().is_none());
    }
}
