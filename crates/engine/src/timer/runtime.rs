// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Real-time timing source backed by tokio.

use super::{TimerCallback, TimerHandle, TimingSource};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// Timing source that spawns one sleeping task per scheduled callback
pub struct TokioTimer {
    runtime: Handle,
    tasks: Arc<Mutex<TaskTable>>,
}

#[derive(Default)]
struct TaskTable {
    next_id: u64,
    live: HashMap<u64, AbortHandle>,
}

impl TokioTimer {
    /// Create a timer spawning onto the given runtime
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            tasks: Arc::new(Mutex::new(TaskTable::default())),
        }
    }

    /// Create a timer on the runtime of the calling context, if any
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }

    /// Number of callbacks that have neither fired nor been cancelled
    pub fn pending(&self) -> usize {
        self.tasks.lock().live.len()
    }
}

impl TimingSource for TokioTimer {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        // Held across spawn so the task cannot look itself up before it is registered
        let mut table = self.tasks.lock();
        table.next_id += 1;
        let id = table.next_id;

        let tasks = Arc::clone(&self.tasks);
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let owned = tasks.lock().live.remove(&id).is_some();
            if owned {
                callback();
            }
        });
        table.live.insert(id, task.abort_handle());
        TimerHandle::from_raw(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        if let Some(task) = self.tasks.lock().live.remove(&handle.id()) {
            task.abort();
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        for (_, task) in self.tasks.lock().live.drain() {
            task.abort();
        }
    }
}

impl std::fmt::Debug for TokioTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioTimer")
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
