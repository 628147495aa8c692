// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cancellable delayed-callback scheduling.
//!
//! The controller never sleeps. Every wait is expressed as a callback
//! scheduled on a [`TimingSource`]: [`ManualTimer`] for deterministic replay
//! and tests, [`TokioTimer`] for real time.

pub mod manual;
pub mod runtime;

pub use manual::ManualTimer;
pub use runtime::TokioTimer;

use std::time::Duration;

/// Callback invoked once when a scheduled delay elapses
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// Identifies one scheduled callback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wrap a raw id issued by a timing source
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Schedules callbacks after a delay.
///
/// Each handle has at most one pending callback. Cancelling a handle whose
/// callback already ran, or that was already cancelled, does nothing.
pub trait TimingSource: Send + Sync {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle;

    fn cancel(&self, handle: TimerHandle);
}
