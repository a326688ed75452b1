//! Tests for the mode catalogue, index mapping and per-mode rules

#[cfg(test)]
mod tests {
    use braille_calibrate::CalibrationError;
    use braille_calibrate::pattern::mask::DotMask;
    use braille_calibrate::pattern::mode::{Mode, Pattern, WalkOrder};

    // Tests catalogue order matches indices
    // Verified by swapping two entries in Mode::ALL
    #[test]
    fn test_index_round_trip_over_catalogue() {
        assert_eq!(Mode::ALL.len(), 15);
        for (index, mode) in Mode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), index);
            assert_eq!(Mode::from_index(index).ok(), Some(*mode));
        }
    }

    // Tests out-of-range indices are rejected
    // Verified by clamping instead of failing
    #[test]
    fn test_unknown_mode_index() {
        let error = Mode::from_index(15).expect_err("index 15 is past the catalogue");
        match error {
            CalibrationError::UnknownMode { index, mode_count } => {
                assert_eq!(index, 15);
                assert_eq!(mode_count, 15);
            }
            other => unreachable!("Expected UnknownMode, got {other:?}"),
        }
        assert!(Mode::try_from(99_usize).is_err());
    }

    // Tests the fixed masks of every fixed-pattern mode
    // Verified by changing one mask constant
    #[test]
    fn test_fixed_masks() {
        let expected = [
            (Mode::AllDotsRowMajor, 0xFF),
            (Mode::AllDotsColumnMajor, 0xFF),
            (Mode::Dots78, 0xC0),
            (Mode::Dots1237, 0x47),
            (Mode::Dots4568, 0xB8),
            (Mode::Dots1346, 0x2D),
            (Mode::Dots1256, 0x33),
            (Mode::Dots1267, 0x63),
            (Mode::Dots347, 0x4C),
            (Mode::Dots12367, 0x67),
            (Mode::Dots12356, 0x37),
            (Mode::Dots3678, 0xE4),
        ];

        for (mode, bits) in expected {
            match mode.pattern() {
                Pattern::Fixed { mask, .. } => assert_eq!(mask.bits(), bits, "{mode}"),
                other => unreachable!("{mode} should be fixed, got {other:?}"),
            }
        }
    }

    // Tests rule kinds for non-fixed modes
    // Verified by mapping dashes to a fixed mask
    #[test]
    fn test_rule_modes() {
        assert_eq!(Mode::RandomGroupings.pattern(), Pattern::Random);
        assert_eq!(Mode::DashesCycle.pattern(), Pattern::DashCycle);
        assert_eq!(
            Mode::Alternate1237And4568.pattern(),
            Pattern::Alternating {
                even: DotMask::DOTS_1237,
                odd: DotMask::DOTS_4568,
            }
        );
    }

    // Tests only the column-major mode walks by columns
    // Verified by marking all fixed modes column-major
    #[test]
    fn test_walk_order() {
        for mode in Mode::ALL {
            let expected = if mode == Mode::AllDotsColumnMajor {
                WalkOrder::ColumnMajor
            } else {
                WalkOrder::RowMajor
            };
            assert_eq!(mode.walk_order(), expected, "{mode}");
        }
    }

    // Tests labels are unique and non-empty
    // Verified by duplicating a label
    #[test]
    fn test_labels() {
        let mut labels: Vec<&str> = Mode::ALL.iter().map(|mode| mode.label()).collect();
        assert!(labels.iter().all(|label| !label.is_empty()));
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Mode::ALL.len());
        assert_eq!(Mode::default(), Mode::AllDotsRowMajor);
        assert_eq!(Mode::Dots347.to_string(), "Dots 3-4-7");
    }
}
