// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction standing in for the system timer
//!
//! Times are reported relative to the system timer epoch, which for
//! `SystemClock` is the first time any clock in the process is read.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

/// A monotonic clock that provides the current system time
pub trait Clock: Clone + Send + Sync {
    /// Microseconds since the system timer epoch
    fn now_us(&self) -> u64;

    /// Milliseconds since the system timer epoch
    fn now(&self) -> u64 {
        self.now_us() / 1000
    }
}

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Real system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_us(&self) -> u64 {
        let epoch = EPOCH.get_or_init(Instant::now);
        u64::try_from(epoch.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone, Debug, Default)]
pub struct FakeClock {
    current_us: Arc<AtomicU64>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock already showing the given time in milliseconds
    pub fn at_millis(ms: u64) -> Self {
        let clock = Self::new();
        clock.set_millis(ms);
        clock
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let delta = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        let _ = self
            .current_us
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |us| {
                Some(us.saturating_add(delta))
            });
    }

    /// Set the clock to a specific time in milliseconds
    pub fn set_millis(&self, ms: u64) {
        self.current_us
            .store(ms.saturating_mul(1000), Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn now_us(&self) -> u64 {
        self.current_us.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
