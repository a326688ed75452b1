//! Tests for frame capture, dot rasterisation and GIF export

#[cfg(test)]
mod tests {
    use braille_calibrate::CalibrationError;
    use braille_calibrate::animation::frame::Frame;
    use braille_calibrate::io::image::{FrameCapture, dot_raster};
    use braille_calibrate::pattern::mask::DotMask;

    // Tests the raster shape wraps cells at the column count
    // Verified by laying every cell on one row
    #[test]
    fn test_dot_raster_shape() {
        let frame = Frame::blank(10);
        assert_eq!(dot_raster(&frame, 4).dim(), (12, 8));
        assert_eq!(dot_raster(&frame, 10).dim(), (4, 20));
    }

    // Tests dots land in braille positions
    // Verified by placing dot 7 in the right column
    #[test]
    fn test_dot_raster_positions() {
        let frame = Frame::single(2, 1, DotMask::DOTS_1237);
        let raster = dot_raster(&frame, 2);

        // Second cell occupies dot columns 2 and 3
        for row in 0..4 {
            assert_eq!(raster.get([row, 2]), Some(&true), "left dot row {row}");
            assert_eq!(raster.get([row, 3]), Some(&false), "right dot row {row}");
            assert_eq!(raster.get([row, 0]), Some(&false));
        }
    }

    // Tests exporting with nothing recorded fails
    // Verified by removing the empty capture check
    #[test]
    fn test_export_without_frames() {
        let capture = FrameCapture::new(4, 100);
        let dir = tempfile::tempdir().expect("temp dir");
        let result = capture.export_gif(&dir.path().join("empty.gif"));
        assert!(matches!(result, Err(CalibrationError::NothingCaptured)));
    }

    // Tests recorded frames export to a GIF file in a new directory
    // Verified by skipping directory creation
    #[test]
    fn test_export_gif_writes_file() {
        let mut capture = FrameCapture::new(3, 200);
        capture.record(&Frame::single(6, 0, DotMask::ALL));
        capture.record(&Frame::blank(6));
        assert_eq!(capture.frame_count(), 2);

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("preview.gif");
        capture.export_gif(&path).expect("export");

        let bytes = std::fs::read(&path).expect("gif written");
        assert!(bytes.starts_with(b"GIF89a"));
    }
}
