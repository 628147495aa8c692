// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trace event types.

use serde::{Deserialize, Serialize};

/// One recorded controller decision
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Sequence number, unique within a log
    pub seq: u64,

    /// Milliseconds on the controller's clock when the event happened
    pub elapsed_ms: u64,

    /// Name of the carousel instance that produced the event
    pub carousel: String,

    /// What happened
    pub event: TraceEvent,
}

/// What triggered an index move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveCause {
    Auto,
    Next,
    Prev,
    GoTo,
    Swipe,
    Responsive,
}

/// Outcome of a completed drag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDecision {
    Advance,
    Retreat,
    SnapBack,
}

/// Controller events
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Auto-advance timer armed
    AutoScheduled { delay_ms: u64 },
    /// Auto-advance was requested but there is nothing to rotate
    AutoDisabled { slide_count: usize },
    /// Auto-advance timer fired
    AutoFired,
    /// An index change was committed and rendered
    Committed {
        from: usize,
        to: usize,
        cause: MoveCause,
    },
    /// A move request arrived while a transition was in flight
    Coalesced { cause: MoveCause },
    /// A move request hit a non-looping boundary
    Blocked { cause: MoveCause, index: usize },
    /// The in-flight transition finished
    TransitionComplete { index: usize },
    /// The clone track was silently snapped back onto a real slide
    Reanchored { slot: usize },
    Paused { reason: String, depth: usize },
    Resumed { reason: String, depth: usize },
    DragStarted { x: f64 },
    DragEnded { delta: f64, decision: SwipeDecision },
    /// Responsive breakpoint toggled the slider
    Enabled { enabled: bool, viewport_px: u32 },
    /// A timer fired after its slot was cancelled or replaced
    StaleTimer,
    Disposed,
}

impl TraceEvent {
    /// Whether this event committed a new index
    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
