//! Tests for status line formatting

#[cfg(test)]
mod tests {
    use braille_calibrate::io::configuration::{Config, Settings};
    use braille_calibrate::io::status::{
        IDLE_STATUS, blink_style, format_counts, paused_status, running_status,
    };
    use braille_calibrate::pattern::mode::Mode;

    // Tests cell and dot totals
    // Verified by multiplying dots by 6
    #[test]
    fn test_format_counts() {
        assert_eq!(
            format_counts(24, 4),
            "Cells: 24 x 4 = 96. Dots: 96 x 8 = 768."
        );
    }

    // Tests running status names mode, counts, interval and blink style
    // Verified by omitting the interval
    #[test]
    fn test_running_status() {
        let config = Config::validate(&Settings {
            columns: 40,
            rows: 1,
            interval_ms: 250,
            mode: Mode::Dots78,
            ..Settings::default()
        })
        .expect("valid settings");

        assert_eq!(
            running_status(&config),
            "Status: Running. Dots 7-8. Cells: 40 x 1 = 40. Dots: 40 x 8 = 320. \
             Interval: 250 ms. Blink whole line: OFF (walking)."
        );
        assert!(paused_status(&config).starts_with("Status: Paused. Dots 7-8."));
    }

    // Tests blink style wording
    // Verified by inverting the flag
    #[test]
    fn test_blink_style_and_idle() {
        assert_eq!(blink_style(true), "Blink whole line: ON.");
        assert_eq!(blink_style(false), "Blink whole line: OFF (walking).");
        assert_eq!(IDLE_STATUS, "Status: Idle.");
    }
}
