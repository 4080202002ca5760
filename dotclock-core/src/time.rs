//! Wall-clock time base
//!
//! Combines the last wall-clock synchronisation with a monotonic
//! millisecond counter and turns the result into the two values the clock
//! renderer needs: days since the epoch and milliseconds since local
//! midnight.

use crate::clock::MS_PER_DAY;

/// Local date and time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalTime {
    /// Days since 1970-01-01 in local time
    pub days: u32,
    /// Milliseconds since local midnight, below [`MS_PER_DAY`]
    pub ms_of_day: u32,
}

impl LocalTime {
    /// Split a local millisecond timestamp; negative values clamp to the epoch
    pub fn from_local_ms(ms: i64) -> Self {
        let ms = ms.max(0) as u64;
        Self {
            days: (ms / MS_PER_DAY as u64).min(u32::MAX as u64) as u32,
            ms_of_day: (ms % MS_PER_DAY as u64) as u32,
        }
    }
}

/// Synchronisation point: Unix time at a monotonic instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct SyncPoint {
    unix_ms: i64,
    at_ms: u64,
}

/// Time base driven by a monotonic millisecond counter
#[derive(Debug, Clone, Copy)]
pub struct TimeBase {
    utc_offset_ms: i64,
    sync: Option<SyncPoint>,
}

impl TimeBase {
    /// Create an unsynchronised time base for a UTC offset in minutes
    pub const fn new(utc_offset_min: i32) -> Self {
        Self {
            utc_offset_ms: utc_offset_min as i64 * 60_000,
            sync: None,
        }
    }

    /// Record that the Unix time was `unix_secs` at monotonic `now_ms`
    pub fn set_unix_time(&mut self, unix_secs: u64, now_ms: u64) {
        self.sync = Some(SyncPoint {
            unix_ms: (unix_secs.min(i64::MAX as u64 / 1000) * 1000) as i64,
            at_ms: now_ms,
        });
    }

    /// Whether a wall-clock time has been received
    pub fn is_synced(&self) -> bool {
        self.sync.is_some()
    }

    pub fn utc_offset_min(&self) -> i32 {
        (self.utc_offset_ms / 60_000) as i32
    }

    /// Local time at monotonic `now_ms`
    ///
    /// Unsynchronised, the clock runs from local midnight of day 0.
    pub fn local(&self, now_ms: u64) -> LocalTime {
        let local_ms = match self.sync {
            Some(sync) => {
                let since = now_ms.saturating_sub(sync.at_ms).min(i64::MAX as u64 / 2) as i64;
                sync.unix_ms
                    .saturating_add(since)
                    .saturating_add(self.utc_offset_ms)
            }
            None => now_ms.min(i64::MAX as u64) as i64,
        };
        LocalTime::from_local_ms(local_ms)
    }
}
