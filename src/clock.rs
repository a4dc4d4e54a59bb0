//! Time sources for TOTP.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current Unix time, in seconds.
///
/// TOTP generation reads the clock exactly once per call, so every counter derived within a
/// call is consistent.
pub trait Clock {
    /// Seconds elapsed since the Unix epoch.
    fn unix_time(&self) -> u64;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_time(&self) -> u64 {
        // A clock set before the epoch reads as the epoch.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    }
}

/// A clock frozen at a fixed Unix time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn unix_time(&self) -> u64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn unix_time(&self) -> u64 {
        (**self).unix_time()
    }
}
