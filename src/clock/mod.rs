//! Time sources for log timestamps.
//!
//! Loggers never read the system time directly; they ask their own [`Clock`],
//! so tests can freeze time with a [`FixedClock`].

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// A source of "now", plus a one-shot timer.
pub trait Clock: Send + Sync {
    /// Current wall-clock time as seen by this clock.
    fn now(&self) -> NaiveDateTime;

    /// Returns a receiver that gets exactly one value, this clock's `now()`,
    /// once `duration` has elapsed.
    fn after(&self, duration: Duration) -> Receiver<NaiveDateTime>;
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn after(&self, duration: Duration) -> Receiver<NaiveDateTime> {
        fire_after(duration, || Local::now().naive_local())
    }
}

/// Always reports the same instant. Timers still wait for real.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    #[must_use]
    pub const fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }

    /// `0001-01-01 00:00:00.000`, the zero timestamp used by tests.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(zero_date().and_time(NaiveTime::default()))
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::zero()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }

    fn after(&self, duration: Duration) -> Receiver<NaiveDateTime> {
        let instant = self.instant;
        fire_after(duration, move || instant)
    }
}

fn zero_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn fire_after<F>(duration: Duration, now: F) -> Receiver<NaiveDateTime>
where
    F: FnOnce() -> NaiveDateTime + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);
    thread::spawn(move || {
        thread::sleep(duration);
        // Receiver may already be gone; nothing to report then.
        let _ = tx.send(now());
    });
    rx
}
