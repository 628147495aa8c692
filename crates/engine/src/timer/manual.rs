// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic timing source driven by a fake clock.

use super::{TimerCallback, TimerHandle, TimingSource};
use crate::time::{Clock, FakeClock};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

/// Timing source that only fires when told to.
///
/// Time moves through [`ManualTimer::advance`]. Due callbacks run in
/// (due time, schedule order), each with the clock set to its own due time
/// and with no internal lock held, so callbacks may schedule or cancel.
#[derive(Clone)]
pub struct ManualTimer {
    clock: FakeClock,
    queue: Arc<Mutex<TimerQueue>>,
}

#[derive(Default)]
struct TimerQueue {
    next_id: u64,
    scheduled_total: u64,
    pending: BTreeMap<(u64, u64), TimerCallback>,
    due_by_id: HashMap<u64, u64>,
}

impl ManualTimer {
    /// Create a timer with its own clock starting at zero
    pub fn new() -> Self {
        Self::with_clock(FakeClock::at_zero())
    }

    /// Create a timer driving an existing fake clock
    pub fn with_clock(clock: FakeClock) -> Self {
        Self {
            clock,
            queue: Arc::new(Mutex::new(TimerQueue::default())),
        }
    }

    /// The clock this timer moves
    pub fn clock(&self) -> &FakeClock {
        &self.clock
    }

    /// Move time forward, firing everything that falls due.
    ///
    /// Returns the number of callbacks that ran.
    pub fn advance(&self, ms: u64) -> usize {
        let target = self.clock.now_millis().saturating_add(ms);
        let mut fired = 0;
        while let Some((due, callback)) = self.pop_due(target) {
            self.clock.set(due);
            callback();
            fired += 1;
        }
        self.clock.set(target);
        fired
    }

    /// Jump to the earliest pending callback and fire it.
    ///
    /// Returns false when nothing is pending.
    pub fn fire_next(&self) -> bool {
        match self.pop_due(u64::MAX) {
            Some((due, callback)) => {
                if due > self.clock.now_millis() {
                    self.clock.set(due);
                }
                callback();
                true
            }
            None => false,
        }
    }

    /// Number of callbacks waiting to fire
    pub fn pending(&self) -> usize {
        self.queue.lock().pending.len()
    }

    /// Number of callbacks ever scheduled, fired or not
    pub fn scheduled_total(&self) -> u64 {
        self.queue.lock().scheduled_total
    }

    /// Due time of the earliest pending callback
    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue
            .lock()
            .pending
            .first_key_value()
            .map(|((due, _), _)| *due)
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.queue.lock().due_by_id.contains_key(&handle.id())
    }

    fn pop_due(&self, limit: u64) -> Option<(u64, TimerCallback)> {
        let mut queue = self.queue.lock();
        let (due, _) = *queue.pending.first_key_value()?.0;
        if due > limit {
            return None;
        }
        let ((due, id), callback) = queue.pending.pop_first()?;
        queue.due_by_id.remove(&id);
        Some((due, callback))
    }
}

impl Default for ManualTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingSource for ManualTimer {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        let due = self
            .clock
            .now_millis()
            .saturating_add(delay.as_millis() as u64);
        let mut queue = self.queue.lock();
        queue.next_id += 1;
        queue.scheduled_total += 1;
        let id = queue.next_id;
        queue.pending.insert((due, id), callback);
        queue.due_by_id.insert(id, due);
        TimerHandle::from_raw(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        let mut queue = self.queue.lock();
        if let Some(due) = queue.due_by_id.remove(&handle.id()) {
            queue.pending.remove(&(due, handle.id()));
        }
    }
}

impl std::fmt::Debug for ManualTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualTimer")
            .field("now_ms", &self.clock.now_millis())
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
#[path = "manual_tests.rs"]
mod tests;
