//! Tests for manual and interval tick sources

#[cfg(test)]
mod tests {
    use braille_calibrate::session::tick::{IntervalTicks, ManualTicks, TickSource};
    use std::time::{Duration, Instant};

    // Tests manual ticks record the armed interval
    // Verified by leaving the interval set after disarm
    #[test]
    fn test_manual_arm_and_disarm() {
        let mut ticks = ManualTicks::new();
        assert!(!ticks.is_armed());

        ticks.arm(Duration::from_millis(300)).expect("arm");
        assert!(ticks.is_armed());
        assert_eq!(ticks.interval(), Some(Duration::from_millis(300)));
        assert_eq!(ticks.arm_count(), 1);

        ticks.disarm();
        ticks.disarm();
        assert!(!ticks.is_armed());
    }

    // Tests a refusing source reports failure and stays disarmed
    // Verified by arming before checking the refusal flag
    #[test]
    fn test_manual_refusal() {
        let mut ticks = ManualTicks::refusing();
        assert!(ticks.arm(Duration::from_millis(10)).is_err());
        assert!(!ticks.is_armed());

        ticks.set_refuse(false);
        assert!(ticks.arm(Duration::from_millis(10)).is_ok());
    }

    // Tests interval ticks come due once per interval
    // Verified by not rescheduling after a tick
    #[test]
    fn test_interval_due() {
        let mut ticks = IntervalTicks::new();
        let start = Instant::now();
        assert_eq!(ticks.time_until_due(start), None);
        assert!(!ticks.take_due(start));

        ticks.arm(Duration::from_millis(50)).expect("arm");
        assert!(ticks.is_armed());
        assert!(!ticks.take_due(Instant::now()));

        let later = Instant::now() + Duration::from_millis(60);
        assert_eq!(ticks.time_until_due(later), Some(Duration::ZERO));
        assert!(ticks.take_due(later));
        assert!(!ticks.take_due(later));
    }

    // Tests a late loop gets one tick rather than a backlog
    // Verified by advancing the deadline by a single interval only
    #[test]
    fn test_interval_no_backlog() {
        let mut ticks = IntervalTicks::new();
        ticks.arm(Duration::from_millis(10)).expect("arm");

        let much_later = Instant::now() + Duration::from_millis(1000);
        assert!(ticks.take_due(much_later));
        assert!(!ticks.take_due(much_later));
        assert_eq!(
            ticks.time_until_due(much_later),
            Some(Duration::from_millis(10))
        );
    }

    // Tests zero intervals and disarm
    // Verified by accepting a zero interval
    #[test]
    fn test_interval_rejects_zero_and_disarms() {
        let mut ticks = IntervalTicks::new();
        assert!(ticks.arm(Duration::ZERO).is_err());
        assert!(!ticks.is_armed());

        ticks.arm(Duration::from_millis(5)).expect("arm");
        ticks.disarm();
        assert!(!ticks.is_armed());
        assert_eq!(ticks.time_until_due(Instant::now()), None);
    }
}
