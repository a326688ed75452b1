//! Tests for settings defaults, configuration validation and constants

#[cfg(test)]
mod tests {
    use braille_calibrate::CalibrationError;
    use braille_calibrate::io::configuration::{
        BRAILLE_BASE, Config, DEFAULT_COLUMNS, DEFAULT_INTERVAL_MS, DEFAULT_ROWS,
        MAX_TOTAL_CELLS, RANDOM_FILL_PROBABILITY, Settings,
    };
    use braille_calibrate::pattern::mode::Mode;
    use std::time::Duration;

    fn settings(columns: u32, rows: u32, interval_ms: u64) -> Settings {
        Settings {
            columns,
            rows,
            interval_ms,
            ..Settings::default()
        }
    }

    // Tests defaults describe a 24 × 4 display at 500 ms
    // Verified by changing a default constant
    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.columns, DEFAULT_COLUMNS);
        assert_eq!(settings.rows, DEFAULT_ROWS);
        assert_eq!(settings.interval_ms, DEFAULT_INTERVAL_MS);
        assert_eq!(settings.mode, Mode::AllDotsRowMajor);
        assert!(settings.looping);
        assert!(!settings.whole_line);
        assert_eq!((DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_INTERVAL_MS), (24, 4, 500));
    }

    // Tests a valid configuration carries derived totals
    // Verified by computing total cells as columns + rows
    #[test]
    fn test_validate_accepts_valid_settings() {
        let config = Config::validate(&settings(24, 4, 250)).expect("valid settings");
        assert_eq!(config.columns(), 24);
        assert_eq!(config.rows(), 4);
        assert_eq!(config.total_cells(), 96);
        assert_eq!(config.interval(), Duration::from_millis(250));
        assert!(config.looping());
        assert!(!config.whole_line());
    }

    // Tests each zero field is rejected by name
    // Verified by skipping the rows check
    #[test]
    fn test_validate_rejects_zero_fields() {
        for (settings, expected) in [
            (settings(0, 4, 500), "columns"),
            (settings(24, 0, 500), "rows"),
            (settings(24, 4, 0), "interval_ms"),
        ] {
            match Config::validate(&settings) {
                Err(CalibrationError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, expected);
                }
                other => unreachable!("Expected InvalidParameter, got {other:?}"),
            }
        }
    }

    // Tests the cell cap boundary
    // Verified by using a strict less-than comparison
    #[test]
    fn test_validate_cell_cap() {
        assert!(Config::validate(&settings(100, 50, 500)).is_ok());
        match Config::validate(&settings(5001, 1, 500)) {
            Err(CalibrationError::GridTooLarge { max_cells, .. }) => {
                assert_eq!(max_cells, MAX_TOTAL_CELLS);
            }
            other => unreachable!("Expected GridTooLarge, got {other:?}"),
        }
        // Product overflowing 32 bits is still rejected
        assert!(Config::validate(&settings(u32::MAX, u32::MAX, 500)).is_err());
    }

    // Tests fixed constants
    // Verified by changing constant values
    #[test]
    fn test_constants() {
        assert_eq!(MAX_TOTAL_CELLS, 5000);
        assert_eq!(BRAILLE_BASE, 0x2800);
        assert!((RANDOM_FILL_PROBABILITY - 0.35).abs() < f64::EPSILON);
    }
}
