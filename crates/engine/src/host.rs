// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Presentation seam between a controller and whatever draws the slides.

use crate::time::{Clock, ClockHandle};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How a clone-edge track should reach a slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackMotion {
    /// Slide with the configured transition
    Animated,
    /// Jump with transitions suppressed (re-anchoring off a clone)
    Instant,
}

/// Capabilities a carousel needs from its presentation adapter.
///
/// Calls are made after the controller has released its state lock, so an
/// implementation may call back into the controller.
pub trait CarouselHost: Send + Sync {
    /// A new index was committed
    fn render_index(&self, index: usize);

    /// Live drag-follow offset in pixels; 0 when the drag ends
    fn on_drag_offset(&self, _px: f64) {}

    /// Clone-edge track position. Only called when `clone_edges` is on.
    fn move_track(&self, _slot: usize, _motion: TrackMotion) {}
}

/// One call made on a host
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostCall {
    Render { index: usize },
    DragOffset { px: f64 },
    Track { slot: usize, motion: TrackMotion },
}

impl HostCall {
    /// Deliver this call to a host
    pub fn deliver(self, host: &dyn CarouselHost) {
        match self {
            HostCall::Render { index } => host.render_index(index),
            HostCall::DragOffset { px } => host.on_drag_offset(px),
            HostCall::Track { slot, motion } => host.move_track(slot, motion),
        }
    }
}

/// A host call stamped with the clock time it arrived
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostEvent {
    pub at_ms: u64,
    #[serde(flatten)]
    pub call: HostCall,
}

/// Host that records every call, for tests and scenario replay
#[derive(Clone, Default)]
pub struct RecordingHost {
    clock: Option<ClockHandle>,
    events: Arc<Mutex<Vec<HostEvent>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp recorded calls with `clock`
    pub fn with_clock(clock: ClockHandle) -> Self {
        Self {
            clock: Some(clock),
            events: Arc::default(),
        }
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().clone()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.events.lock().iter().map(|e| e.call).collect()
    }

    /// Indices passed to `render_index`, in order
    pub fn renders(&self) -> Vec<usize> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e.call {
                HostCall::Render { index } => Some(index),
                _ => None,
            })
            .collect()
    }

    pub fn render_count(&self) -> usize {
        self.renders().len()
    }

    pub fn last_render(&self) -> Option<usize> {
        self.renders().last().copied()
    }

    pub fn drag_offsets(&self) -> Vec<f64> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e.call {
                HostCall::DragOffset { px } => Some(px),
                _ => None,
            })
            .collect()
    }

    pub fn track_moves(&self) -> Vec<(usize, TrackMotion)> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e.call {
                HostCall::Track { slot, motion } => Some((slot, motion)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    fn push(&self, call: HostCall) {
        let at_ms = self.clock.as_ref().map_or(0, |c| c.now_millis());
        self.events.lock().push(HostEvent { at_ms, call });
    }
}

impl CarouselHost for RecordingHost {
    fn render_index(&self, index: usize) {
        self.push(HostCall::Render { index });
    }

    fn on_drag_offset(&self, px: f64) {
        self.push(HostCall::DragOffset { px });
    }

    fn move_track(&self, slot: usize, motion: TrackMotion) {
        self.push(HostCall::Track { slot, motion });
    }
}

impl std::fmt::Debug for RecordingHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingHost")
            .field("events", &self.events.lock().len())
            .finish()
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
