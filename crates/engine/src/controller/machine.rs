// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Carousel state machine.
//!
//! `Machine` holds all mutable carousel state and decides every transition.
//! It never touches the host or a timer directly; side effects go through an
//! [`Effects`] sink so the controller can apply them with its own locking.

use super::pause::{PauseReason, PauseSet};
use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::gesture::{GestureEvent, GestureRecognizer};
use crate::host::{HostCall, TrackMotion};
use crate::index::{IndexModel, Step, TrackLayout, TrackMove};
use crate::timer::TimerHandle;
use serde::{Deserialize, Serialize};
use slidekit_trace::{MoveCause, SwipeDecision, TraceEvent};
use std::time::Duration;

/// Controller lifecycle phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing scheduled
    Idle,
    /// Auto-advance timer armed
    AutoScheduled,
    /// A pointer drag is in progress
    Dragging,
    /// A move was committed and is animating
    Transitioning,
    /// Started, but held by at least one pause reason
    Paused,
    /// Torn down; every call is a no-op
    Disposed,
}

/// Which timer slot a callback belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TimerKind {
    Auto,
    Transition,
}

/// Side effects requested by the machine
pub(crate) trait Effects {
    fn schedule(&mut self, kind: TimerKind, delay: Duration, token: u64) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
    fn host(&mut self, call: HostCall);
    fn trace(&mut self, event: TraceEvent);
}

#[derive(Clone, Copy, Debug)]
struct TimerSlot {
    handle: TimerHandle,
    token: u64,
}

/// Read-only view of a carousel's state
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub index: usize,
    pub slide_count: usize,
    pub phase: Phase,
    pub pause_depth: usize,
    pub pause_reasons: Vec<String>,
    /// Drag displacement; only meaningful while dragging
    pub drag_delta: f64,
    /// Clone-edge track slot, when the carousel renders on one
    pub track_slot: Option<usize>,
    pub enabled: bool,
    pub started: bool,
}

pub(crate) struct Machine {
    config: CarouselConfig,
    index: IndexModel,
    gesture: GestureRecognizer,
    track: Option<TrackLayout>,
    slot: usize,
    reanchor: Option<usize>,
    phase: Phase,
    pauses: PauseSet,
    started: bool,
    enabled: bool,
    auto: Option<TimerSlot>,
    transition: Option<TimerSlot>,
    next_token: u64,
}

impl Machine {
    /// Build from an already validated config
    pub(crate) fn new(config: CarouselConfig) -> Self {
        let index = IndexModel::new(config.slide_count, config.looping, config.start_index);
        let track = config
            .uses_clone_track()
            .then(|| TrackLayout::new(config.slide_count));
        let slot = track.map_or(0, |t| t.slot_of(index.current()));
        Self {
            gesture: GestureRecognizer::new(config.swipe_threshold_px, config.drag_resistance),
            index,
            track,
            slot,
            reanchor: None,
            phase: Phase::Idle,
            pauses: PauseSet::default(),
            started: false,
            enabled: true,
            auto: None,
            transition: None,
            next_token: 0,
            config,
        }
    }

    pub(crate) fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn is_disposed(&self) -> bool {
        self.phase == Phase::Disposed
    }

    pub(crate) fn current(&self) -> usize {
        self.index.current()
    }

    pub(crate) fn holds(&self, reason: &PauseReason) -> bool {
        self.pauses.holds(reason)
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            index: self.index.current(),
            slide_count: self.index.count(),
            phase: self.phase,
            pause_depth: self.pauses.depth(),
            pause_reasons: self.pauses.reasons().iter().map(|r| r.to_string()).collect(),
            drag_delta: self.gesture.delta(),
            track_slot: self.track.map(|_| self.slot),
            enabled: self.enabled,
            started: self.started,
        }
    }

    /// Handles of every timer still armed
    pub(crate) fn outstanding_timers(&self) -> Vec<TimerHandle> {
        self.auto
            .iter()
            .chain(self.transition.iter())
            .map(|s| s.handle)
            .collect()
    }

    // -- lifecycle ---------------------------------------------------------

    pub(crate) fn start(&mut self, fx: &mut dyn Effects) {
        if self.is_disposed() {
            return;
        }
        self.started = true;
        if matches!(self.phase, Phase::Dragging | Phase::Transitioning) {
            // Re-armed when the drag or transition settles
            return;
        }
        if self.config.auto_advance_ms > 0 && !self.index.can_rotate() {
            fx.trace(TraceEvent::AutoDisabled {
                slide_count: self.index.count(),
            });
        }
        self.arm_auto(fx);
    }

    pub(crate) fn dispose(&mut self, fx: &mut dyn Effects) {
        if self.is_disposed() {
            return;
        }
        self.cancel_auto(fx);
        self.cancel_transition(fx);
        self.gesture.reset();
        self.reanchor = None;
        self.phase = Phase::Disposed;
        fx.trace(TraceEvent::Disposed);
    }

    // -- timers ------------------------------------------------------------

    pub(crate) fn on_timer(&mut self, kind: TimerKind, token: u64, fx: &mut dyn Effects) {
        if self.is_disposed() {
            return;
        }
        let slot = match kind {
            TimerKind::Auto => &mut self.auto,
            TimerKind::Transition => &mut self.transition,
        };
        if slot.map(|s| s.token) != Some(token) {
            fx.trace(TraceEvent::StaleTimer);
            return;
        }
        *slot = None;

        match kind {
            TimerKind::Auto => self.auto_fired(fx),
            TimerKind::Transition => self.complete_transition(fx),
        }
    }

    fn auto_fired(&mut self, fx: &mut dyn Effects) {
        if self.phase != Phase::AutoScheduled {
            fx.trace(TraceEvent::StaleTimer);
            return;
        }
        fx.trace(TraceEvent::AutoFired);
        let from = self.index.current();
        if self.index.peek(Step::Forward) == from {
            // Non-looping carousel reached its last slide: stop rotating
            fx.trace(TraceEvent::Blocked {
                cause: MoveCause::Auto,
                index: from,
            });
            self.phase = Phase::Idle;
            return;
        }
        self.commit_step(Step::Forward, MoveCause::Auto, fx);
    }

    fn next_token(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }

    /// Auto-advance delay, if this carousel would rotate on its own right now
    /// (ignoring pauses)
    fn auto_delay(&self) -> Option<Duration> {
        if !self.started || !self.enabled || !self.index.can_rotate() {
            return None;
        }
        self.config.auto_advance()
    }

    /// Arm auto-advance, or settle into `Paused`/`Idle` when it cannot run
    fn arm_auto(&mut self, fx: &mut dyn Effects) {
        self.cancel_auto(fx);
        let Some(delay) = self.auto_delay() else {
            self.phase = Phase::Idle;
            return;
        };
        if self.pauses.depth() > 0 {
            self.phase = Phase::Paused;
            return;
        }
        let token = self.next_token();
        let handle = fx.schedule(TimerKind::Auto, delay, token);
        self.auto = Some(TimerSlot { handle, token });
        self.phase = Phase::AutoScheduled;
        fx.trace(TraceEvent::AutoScheduled {
            delay_ms: self.config.auto_advance_ms,
        });
    }

    fn cancel_auto(&mut self, fx: &mut dyn Effects) {
        if let Some(slot) = self.auto.take() {
            fx.cancel(slot.handle);
        }
    }

    fn cancel_transition(&mut self, fx: &mut dyn Effects) {
        if let Some(slot) = self.transition.take() {
            fx.cancel(slot.handle);
        }
    }

    // -- moves -------------------------------------------------------------

    fn commit_step(&mut self, step: Step, cause: MoveCause, fx: &mut dyn Effects) {
        let from = self.index.current();
        let track_move = self.track.map(|t| t.step(from, step));
        let to = self.index.step(step);
        self.begin_transition(from, to, cause, track_move, fx);
    }

    fn begin_transition(
        &mut self,
        from: usize,
        to: usize,
        cause: MoveCause,
        track_move: Option<TrackMove>,
        fx: &mut dyn Effects,
    ) {
        fx.trace(TraceEvent::Committed { from, to, cause });
        if let Some(mv) = track_move {
            self.slot = mv.target;
            self.reanchor = mv.reanchor;
            fx.host(HostCall::Track {
                slot: mv.target,
                motion: TrackMotion::Animated,
            });
        }
        fx.host(HostCall::Render { index: to });
        self.phase = Phase::Transitioning;

        let duration = self.config.transition();
        if duration.is_zero() {
            self.complete_transition(fx);
        } else {
            let token = self.next_token();
            let handle = fx.schedule(TimerKind::Transition, duration, token);
            self.transition = Some(TimerSlot { handle, token });
        }
    }

    /// End the in-flight transition without re-arming auto-advance
    fn finish_transition(&mut self, fx: &mut dyn Effects) {
        self.cancel_transition(fx);
        if let Some(slot) = self.reanchor.take() {
            self.slot = slot;
            fx.host(HostCall::Track {
                slot,
                motion: TrackMotion::Instant,
            });
            fx.trace(TraceEvent::Reanchored { slot });
        }
        fx.trace(TraceEvent::TransitionComplete {
            index: self.index.current(),
        });
        self.phase = Phase::Idle;
    }

    fn complete_transition(&mut self, fx: &mut dyn Effects) {
        self.finish_transition(fx);
        self.arm_auto(fx);
    }

    /// `next`/`prev` from the user
    pub(crate) fn user_step(&mut self, step: Step, fx: &mut dyn Effects) {
        let cause = match step {
            Step::Forward => MoveCause::Next,
            Step::Backward => MoveCause::Prev,
        };
        match self.phase {
            Phase::Disposed | Phase::Dragging => return,
            Phase::Transitioning => {
                fx.trace(TraceEvent::Coalesced { cause });
                return;
            }
            Phase::Idle | Phase::AutoScheduled | Phase::Paused => {}
        }
        if !self.enabled {
            return;
        }
        let from = self.index.current();
        if self.index.peek(step) == from {
            fx.trace(TraceEvent::Blocked { cause, index: from });
            return;
        }
        self.cancel_auto(fx);
        self.commit_step(step, cause, fx);
    }

    pub(crate) fn go_to(&mut self, target: usize, fx: &mut dyn Effects) -> Result<(), CarouselError> {
        if self.is_disposed() {
            return Ok(());
        }
        self.index.check(target)?;
        match self.phase {
            Phase::Transitioning => {
                fx.trace(TraceEvent::Coalesced {
                    cause: MoveCause::GoTo,
                });
                return Ok(());
            }
            Phase::Dragging => return Ok(()),
            _ => {}
        }
        if !self.enabled {
            return Ok(());
        }

        self.cancel_auto(fx);
        let from = self.index.current();
        if target == from {
            // Same slide: only restart the countdown
            self.arm_auto(fx);
            return Ok(());
        }
        self.index.go_to(target)?;
        let track_move = self.track.map(|t| t.jump(target));
        self.begin_transition(from, target, MoveCause::GoTo, track_move, fx);
        Ok(())
    }

    // -- pausing -----------------------------------------------------------

    pub(crate) fn pause(&mut self, reason: PauseReason, fx: &mut dyn Effects) {
        if self.is_disposed() {
            return;
        }
        let depth = self.pauses.hold(reason.clone());
        fx.trace(TraceEvent::Paused {
            reason: reason.to_string(),
            depth,
        });
        self.cancel_auto(fx);
        let idle_but_due = self.phase == Phase::Idle && self.auto_delay().is_some();
        if self.phase == Phase::AutoScheduled || idle_but_due {
            self.phase = Phase::Paused;
        }
    }

    pub(crate) fn resume(&mut self, reason: &PauseReason, fx: &mut dyn Effects) {
        if self.is_disposed() {
            return;
        }
        let Some(depth) = self.pauses.release(reason) else {
            return;
        };
        fx.trace(TraceEvent::Resumed {
            reason: reason.to_string(),
            depth,
        });
        if depth == 0 && self.phase == Phase::Paused {
            self.start(fx);
        }
    }

    /// Hold or release `reason` so that repeated calls with the same flag
    /// count once.
    pub(crate) fn set_flag(&mut self, reason: PauseReason, on: bool, fx: &mut dyn Effects) {
        match (on, self.pauses.holds(&reason)) {
            (true, false) => self.pause(reason, fx),
            (false, true) => self.resume(&reason, fx),
            _ => {}
        }
    }

    // -- gestures ----------------------------------------------------------

    pub(crate) fn gesture_start(&mut self, x: f64, fx: &mut dyn Effects) {
        if self.is_disposed()
            || !self.config.drag_enabled
            || !self.enabled
            || self.index.count() == 0
        {
            return;
        }
        if self.phase == Phase::Dragging {
            self.gesture.start(x);
            fx.trace(TraceEvent::DragStarted { x });
            return;
        }
        if self.phase == Phase::Transitioning {
            self.finish_transition(fx);
        }
        self.gesture.start(x);
        fx.trace(TraceEvent::DragStarted { x });
        self.pause(PauseReason::DRAG, fx);
        self.phase = Phase::Dragging;
    }

    pub(crate) fn gesture_move(&mut self, x: f64, fx: &mut dyn Effects) {
        if self.phase != Phase::Dragging {
            return;
        }
        if let Some(GestureEvent::DragProgress { offset, .. }) = self.gesture.update(x) {
            fx.host(HostCall::DragOffset { px: offset });
        }
    }

    pub(crate) fn gesture_end(&mut self, cancelled: bool, fx: &mut dyn Effects) {
        if self.phase != Phase::Dragging {
            return;
        }
        let event = if cancelled {
            self.gesture.cancel()
        } else {
            self.gesture.end()
        };
        let Some(event) = event else {
            return;
        };
        let (decision, delta) = match event {
            GestureEvent::Advance { delta } => (SwipeDecision::Advance, delta),
            GestureEvent::Retreat { delta } => (SwipeDecision::Retreat, delta),
            GestureEvent::SnapBack { delta } => (SwipeDecision::SnapBack, delta),
            GestureEvent::DragStarted { .. } | GestureEvent::DragProgress { .. } => return,
        };
        fx.trace(TraceEvent::DragEnded { delta, decision });
        fx.host(HostCall::DragOffset { px: 0.0 });
        self.phase = Phase::Idle;

        let step = match decision {
            SwipeDecision::Advance => Some(Step::Forward),
            SwipeDecision::Retreat => Some(Step::Backward),
            SwipeDecision::SnapBack => None,
        };
        match step {
            Some(step) if self.index.peek(step) != self.index.current() => {
                self.commit_step(step, MoveCause::Swipe, fx);
            }
            Some(_) => {
                fx.trace(TraceEvent::Blocked {
                    cause: MoveCause::Swipe,
                    index: self.index.current(),
                });
                self.snap_back(fx);
            }
            None => self.snap_back(fx),
        }

        if let Some(depth) = self.pauses.release(&PauseReason::DRAG) {
            fx.trace(TraceEvent::Resumed {
                reason: PauseReason::DRAG.to_string(),
                depth,
            });
        }
        if self.phase != Phase::Transitioning {
            self.arm_auto(fx);
        }
    }

    /// Re-render the current slide after a drag that did not move
    fn snap_back(&mut self, fx: &mut dyn Effects) {
        if self.track.is_some() {
            fx.host(HostCall::Track {
                slot: self.slot,
                motion: TrackMotion::Animated,
            });
        }
        fx.host(HostCall::Render {
            index: self.index.current(),
        });
    }

    // -- responsive --------------------------------------------------------

    pub(crate) fn set_viewport_width(&mut self, viewport_px: u32, fx: &mut dyn Effects) {
        if self.is_disposed() {
            return;
        }
        let Some(breakpoint) = self.config.responsive else {
            return;
        };
        let allow = breakpoint.allows(viewport_px);
        if allow == self.enabled {
            return;
        }
        fx.trace(TraceEvent::Enabled {
            enabled: allow,
            viewport_px,
        });

        if allow {
            self.enabled = true;
            self.resume(&PauseReason::RESPONSIVE, fx);
            if self.started && self.phase == Phase::Idle {
                // Started while disabled, so nothing was ever armed
                self.arm_auto(fx);
            }
            return;
        }

        match self.phase {
            Phase::Dragging => {
                self.gesture.reset();
                self.pauses.release(&PauseReason::DRAG);
                fx.host(HostCall::DragOffset { px: 0.0 });
                self.phase = Phase::Idle;
            }
            Phase::Transitioning => self.finish_transition(fx),
            _ => {}
        }
        self.pause(PauseReason::RESPONSIVE, fx);
        self.enabled = false;

        let from = self.index.current();
        if from != 0 {
            self.index.rewind();
            if let Some(track) = self.track {
                self.slot = track.slot_of(0);
                fx.host(HostCall::Track {
                    slot: self.slot,
                    motion: TrackMotion::Instant,
                });
            }
            fx.trace(TraceEvent::Committed {
                from,
                to: 0,
                cause: MoveCause::Responsive,
            });
            fx.host(HostCall::Render { index: 0 });
        }
    }
}

#[cfg(test)]
#[path = "machine_tests.rs"]
mod tests;
