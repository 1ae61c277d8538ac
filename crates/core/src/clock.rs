// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time source for invocation durations and overflow file ages.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Supplies monotonic time for measuring durations and wall-clock time
/// (milliseconds since the Unix epoch) for naming and aging files.
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> Instant;
    fn epoch_ms(&self) -> u64;

    /// Whole milliseconds elapsed since `start`.
    fn elapsed_ms(&self, start: Instant) -> u64 {
        self.now().saturating_duration_since(start).as_millis() as u64
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn epoch_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

struct FakeClockState {
    instant: Instant,
    epoch_ms: u64,
}

/// Manually driven clock. Both readings move together on `advance`.
#[derive(Clone)]
pub struct FakeClock {
    state: Arc<Mutex<FakeClockState>>,
}

impl FakeClock {
    /// Starts at the real current wall-clock time so file ages compare
    /// sensibly against modification times written by the OS.
    pub fn new() -> Self {
        Self::at_epoch_ms(SystemClock.epoch_ms())
    }

    pub fn at_epoch_ms(epoch_ms: u64) -> Self {
        let state = FakeClockState {
            instant: Instant::now(),
            epoch_ms,
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn advance(&self, duration: Duration) {
        let mut state = self.state.lock();
        state.instant += duration;
        state.epoch_ms += duration.as_millis() as u64;
    }

    pub fn set_epoch_ms(&self, ms: u64) {
        self.state.lock().epoch_ms = ms;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.state.lock().instant
    }

    fn epoch_ms(&self) -> u64 {
        self.state.lock().epoch_ms
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
