// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Millisecond clocks for timestamping host calls and trace records.
//!
//! Tests and scenarios share a [`FakeClock`] with a
//! [`ManualTimer`](crate::timer::ManualTimer), so every recorded time is the
//! simulated one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Source of "now" in milliseconds
pub trait Clock: Send + Sync {
    /// Milliseconds elapsed since the clock's origin
    fn now_millis(&self) -> u64;
}

/// Monotonic wall clock with its origin at creation
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Settable clock; clones share the same time
#[derive(Clone, Debug, Default)]
pub struct FakeClock {
    current_millis: Arc<AtomicU64>,
}

impl FakeClock {
    pub fn new(start_millis: u64) -> Self {
        Self {
            current_millis: Arc::new(AtomicU64::new(start_millis)),
        }
    }

    pub fn at_zero() -> Self {
        Self::new(0)
    }

    pub fn advance_ms(&self, ms: u64) {
        self.current_millis.fetch_add(ms, Ordering::SeqCst);
    }

    /// Jump to an absolute time
    pub fn set(&self, millis: u64) {
        self.current_millis.store(millis, Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn now_millis(&self) -> u64 {
        self.current_millis.load(Ordering::SeqCst)
    }
}

/// Either clock, as held by controllers and recording hosts
#[derive(Clone, Debug)]
pub enum ClockHandle {
    System(SystemClock),
    Fake(FakeClock),
}

impl ClockHandle {
    pub fn system() -> Self {
        Self::System(SystemClock::new())
    }
}

impl From<FakeClock> for ClockHandle {
    fn from(clock: FakeClock) -> Self {
        Self::Fake(clock)
    }
}

impl Clock for ClockHandle {
    fn now_millis(&self) -> u64 {
        match self {
            Self::System(c) => c.now_millis(),
            Self::Fake(c) => c.now_millis(),
        }
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
