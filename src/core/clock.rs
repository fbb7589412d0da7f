//! Timestamp sources.
//!
//! The tracker stamps every (re)started session. `SystemClock` reads wall
//! time but never runs backwards; `ManualClock` is set by hand for
//! deterministic tests and replays.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, TimeZone, Utc};

/// Source of session timestamps.
///
/// Readings must never decrease.
pub trait Clock: Send + Sync {
    /// Current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time, clamped so successive readings never go backwards.
#[derive(Debug, Default)]
pub struct SystemClock {
    /// Highest reading handed out so far, in milliseconds since the epoch.
    last_millis: AtomicI64,
}

impl SystemClock {
    /// Create a new system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let wall = Utc::now().timestamp_millis();
        let prev = self.last_millis.fetch_max(wall, Ordering::AcqRel);
        millis_to_datetime(wall.max(prev))
    }
}

/// Manually driven clock.
///
/// ## Example
///
/// ```
/// use bottle_game::core::{Clock, ManualClock};
///
/// let clock = ManualClock::at_seconds(1_700_000_000);
/// assert_eq!(clock.now().timestamp(), 1_700_000_000);
///
/// clock.advance_seconds(12);
/// assert_eq!(clock.now().timestamp(), 1_700_000_012);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    /// Create a clock reading `seconds` since the Unix epoch.
    #[must_use]
    pub fn at_seconds(seconds: i64) -> Self {
        Self {
            millis: AtomicI64::new(seconds.saturating_mul(1000)),
        }
    }

    /// Move the clock forward.
    pub fn advance_seconds(&self, seconds: u32) {
        self.millis
            .fetch_add(i64::from(seconds) * 1000, Ordering::AcqRel);
    }

    /// Jump to a later time. Earlier times are ignored.
    pub fn set(&self, time: DateTime<Utc>) {
        self.millis
            .fetch_max(time.timestamp_millis(), Ordering::AcqRel);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        millis_to_datetime(self.millis.load(Ordering::Acquire))
    }
}

fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
