//! A process-wide clock that tests can freeze.
//!
//! Code under test reads the time through [`now`] or [`current_time_millis`].
//! By default both follow the system clock; [`set_current_millis_fixed`]
//! pins them to one instant until [`set_current_millis_system`] is called.
//! Prefer the scoped [`TimeMachine`](crate::TimeMachine), which always
//! restores the system clock.

use chrono::{DateTime, TimeZone, Utc};
use parking_lot::RwLock;

static FIXED_MILLIS: RwLock<Option<i64>> = parking_lot::const_rwlock(None);

/// Milliseconds since the Unix epoch, fixed or from the system clock.
pub fn current_time_millis() -> i64 {
    match *FIXED_MILLIS.read() {
        Some(millis) => millis,
        None => Utc::now().timestamp_millis(),
    }
}

/// The current instant, fixed or from the system clock.
///
/// A fixed value outside chrono's representable range falls back to the
/// system clock.
pub fn now() -> DateTime<Utc> {
    match *FIXED_MILLIS.read() {
        Some(millis) => Utc
            .timestamp_millis_opt(millis)
            .single()
            .unwrap_or_else(Utc::now),
        None => Utc::now(),
    }
}

/// Pins the clock to `millis` since the Unix epoch.
pub fn set_current_millis_fixed(millis: i64) {
    *FIXED_MILLIS.write() = Some(millis);
    tracing::debug!(millis, "clock fixed");
}

/// Returns the clock to system time.
pub fn set_current_millis_system() {
    if FIXED_MILLIS.write().take().is_some() {
        tracing::debug!("clock released");
    }
}

pub fn is_fixed() -> bool {
    FIXED_MILLIS.read().is_some()
}

/// Serializes tests that touch the process-wide clock.
#[cfg(test)]
pub(crate) static TEST_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());
