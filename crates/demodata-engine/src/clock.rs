//! Time-window seed derivation.
//!
//! Wall-clock time is the only impure input of the whole engine. It enters
//! through the [`Clock`] trait so tests can pin the epoch instead of racing
//! real time, and it is immediately quantized into a coarse integer epoch by
//! [`epoch_for`].

use chrono::{DateTime, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// Length of one determinism window in milliseconds.
///
/// All generation calls that happen within the same window observe the same
/// epoch and therefore produce identical data.
pub const WINDOW_MILLIS: u64 = 30_000;

/// Map a wall-clock instant to its window epoch.
pub fn epoch_for(now_millis: u64) -> u64 {
    now_millis / WINDOW_MILLIS
}

/// Start of an epoch's window as a UTC instant.
///
/// Synthesized timestamps (order dates, alert times) are anchored to the
/// window start rather than the raw wall clock, so they stay byte-stable
/// for the whole window. Epochs beyond chrono's representable range (never
/// produced by a sane clock) saturate to the maximum instant; the fallback
/// stays deterministic.
pub fn window_start(epoch: u64) -> DateTime<Utc> {
    let millis = epoch.saturating_mul(WINDOW_MILLIS).min(i64::MAX as u64) as i64;
    DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Source of the current time in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_millis(&self) -> u64;

    /// The current window epoch.
    fn epoch(&self) -> u64 {
        epoch_for(self.now_millis())
    }
}

/// Production clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Test clock pinned to a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now_millis: u64,
}

impl FixedClock {
    /// Pin the clock to an absolute millisecond timestamp.
    pub fn at_millis(now_millis: u64) -> Self {
        Self { now_millis }
    }

    /// Pin the clock to the start of the given epoch's window.
    pub fn at_epoch(epoch: u64) -> Self {
        Self {
            now_millis: epoch * WINDOW_MILLIS,
        }
    }

    /// A copy of this clock advanced by whole windows.
    pub fn advanced_by_windows(&self, windows: u64) -> Self {
        Self {
            now_millis: self.now_millis + windows * WINDOW_MILLIS,
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.now_millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_floor_division() {
        assert_eq!(epoch_for(0), 0);
        assert_eq!(epoch_for(29_999), 0);
        assert_eq!(epoch_for(30_000), 1);
        assert_eq!(epoch_for(59_999), 1);
        assert_eq!(epoch_for(60_000), 2);
    }

    #[test]
    fn test_same_window_same_epoch() {
        // Any two instants inside one window map to the same epoch.
        let base = 1_700_000_010_000u64;
        let epoch = epoch_for(base);
        for offset in [0, 1, 500, 29_999 - (base % WINDOW_MILLIS)] {
            assert_eq!(epoch_for(base + offset), epoch);
        }
    }

    #[test]
    fn test_fixed_clock_at_epoch() {
        let clock = FixedClock::at_epoch(42);
        assert_eq!(clock.epoch(), 42);
        assert_eq!(clock.advanced_by_windows(3).epoch(), 45);
    }

    #[test]
    fn test_window_start_matches_epoch() {
        let epoch = 56_000_000u64;
        let start = window_start(epoch);
        assert_eq!(epoch_for(start.timestamp_millis() as u64), epoch);
    }

    #[test]
    fn test_window_start_saturates_out_of_range() {
        // Unreachable from a real clock, but the fallback must not read the
        // live wall clock.
        let a = window_start(u64::MAX);
        let b = window_start(u64::MAX);
        assert_eq!(a, b);
        assert_eq!(a, DateTime::<Utc>::MAX_UTC);
    }
}
