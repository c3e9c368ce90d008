use chrono::{DateTime, Utc};

use crate::{TestRule, clock};

/// Freezes the crate [`clock`] for the duration of a test.
///
/// Inside [`apply`](TestRule::apply) the test may travel to any instant with
/// [`go_to_and_stay_at`](Self::go_to_and_stay_at); when the block ends, by
/// return or by panic, the clock follows system time again.
///
/// The clock is process-wide: run tests using a time machine one at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeMachine {
    _private: (),
}

/// Restores the system clock on drop.
#[derive(Debug)]
#[must_use = "the clock is released as soon as the guard is dropped"]
pub struct ClockGuard {
    _private: (),
}

impl Drop for ClockGuard {
    fn drop(&mut self) {
        clock::set_current_millis_system();
    }
}

impl TimeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the clock to `millis` since the Unix epoch.
    pub fn go_to_and_stay_at(&self, millis: i64) {
        clock::set_current_millis_fixed(millis);
    }

    pub fn go_to_and_stay_at_date_time(&self, date_time: DateTime<Utc>) {
        clock::set_current_millis_fixed(date_time.timestamp_millis());
    }
}

impl TestRule for TimeMachine {
    type Guard = ClockGuard;

    fn before(&self) -> ClockGuard {
        ClockGuard { _private: () }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TEST_LOCK;
    use chrono::TimeZone;

    #[test]
    fn clock_is_fixed_inside_block() {
        let _lock = TEST_LOCK.lock();
        let time_machine = TimeMachine::new();
        let seen = time_machine.apply(|| {
            time_machine.go_to_and_stay_at(1_426_000_000_000);
            clock::current_time_millis()
        });
        assert_eq!(seen, 1_426_000_000_000);
        assert!(!clock::is_fixed());
    }

    #[test]
    fn date_time_is_converted_to_millis() {
        let _lock = TEST_LOCK.lock();
        let time_machine = TimeMachine::new();
        let instant = Utc.with_ymd_and_hms(2015, 3, 18, 12, 0, 0).unwrap();
        time_machine.apply(|| {
            time_machine.go_to_and_stay_at_date_time(instant);
            assert_eq!(clock::now(), instant);
        });
    }

    #[test]
    fn clock_is_released_after_panic() {
        let _lock = TEST_LOCK.lock();
        let time_machine = TimeMachine::new();
        let result = std::panic::catch_unwind(|| {
            time_machine.apply(|| {
                time_machine.go_to_and_stay_at(7);
                panic!("test body failed");
            })
        });
        assert!(result.is_err());
        assert!(!clock::is_fixed());
    }

    #[test]
    fn guard_releases_on_drop() {
        let _lock = TEST_LOCK.lock();
        let time_machine = TimeMachine::new();
        {
            let _guard = time_machine.before();
            time_machine.go_to_and_stay_at(99);
            assert_eq!(clock::current_time_millis(), 99);
        }
        assert!(!clock::is_fixed());
    }

    #[test]
    fn travelling_without_a_block_stays_until_released() {
        let _lock = TEST_LOCK.lock();
        let time_machine = TimeMachine::new();
        time_machine.go_to_and_stay_at(3);
        assert_eq!(clock::current_time_millis(), 3);
        clock::set_current_millis_system();
    }
}
