// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input-agnostic swipe recognition.
//!
//! Touch and mouse input both reduce to horizontal position samples:
//! `start(x)`, any number of `update(x)`, then `end()` or `cancel()`.
//! The recognizer turns that stream into a single swipe decision.

use slidekit_trace::SwipeDecision;

/// Default minimum displacement for a swipe, in pixels
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Default drag-follow scale applied beyond the threshold
pub const DEFAULT_DRAG_RESISTANCE: f64 = 0.5;

/// Events emitted while a drag is recognized
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    DragStarted { origin: f64 },
    /// Raw displacement and the damped offset a host should render
    DragProgress { delta: f64, offset: f64 },
    /// Content was flung left: show the next slide
    Advance { delta: f64 },
    /// Content was flung right: show the previous slide
    Retreat { delta: f64 },
    /// Not far enough; settle back on the current slide
    SnapBack { delta: f64 },
}

impl GestureEvent {
    /// The swipe decision carried by a terminal event
    pub fn decision(&self) -> Option<SwipeDecision> {
        match self {
            Self::Advance { .. } => Some(SwipeDecision::Advance),
            Self::Retreat { .. } => Some(SwipeDecision::Retreat),
            Self::SnapBack { .. } => Some(SwipeDecision::SnapBack),
            Self::DragStarted { .. } | Self::DragProgress { .. } => None,
        }
    }
}

/// Swipe recognizer for one carousel
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    threshold: f64,
    resistance: f64,
    origin: Option<f64>,
    delta: f64,
}

impl GestureRecognizer {
    /// Create a recognizer; callers validate `threshold > 0` and
    /// `0 < resistance <= 1` beforehand.
    pub fn new(threshold: f64, resistance: f64) -> Self {
        Self {
            threshold,
            resistance,
            origin: None,
            delta: 0.0,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether a drag is in progress
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Current displacement (zero when idle)
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Pointer went down. Restarts from `x` if a drag was already active.
    pub fn start(&mut self, x: f64) -> GestureEvent {
        self.origin = Some(x);
        self.delta = 0.0;
        GestureEvent::DragStarted { origin: x }
    }

    /// Pointer moved; ignored when no drag is active
    pub fn update(&mut self, x: f64) -> Option<GestureEvent> {
        let origin = self.origin?;
        self.delta = x - origin;
        Some(GestureEvent::DragProgress {
            delta: self.delta,
            offset: self.follow_offset(self.delta),
        })
    }

    /// Pointer released; ignored when no drag is active
    pub fn end(&mut self) -> Option<GestureEvent> {
        self.origin.take()?;
        let delta = std::mem::take(&mut self.delta);
        let event = if delta.abs() > self.threshold {
            if delta < 0.0 {
                GestureEvent::Advance { delta }
            } else {
                GestureEvent::Retreat { delta }
            }
        } else {
            GestureEvent::SnapBack { delta }
        };
        Some(event)
    }

    /// Pointer left or the touch was cancelled
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        self.origin.take()?;
        let delta = std::mem::take(&mut self.delta);
        Some(GestureEvent::SnapBack { delta })
    }

    /// Drop any in-progress drag without emitting anything
    pub fn reset(&mut self) {
        self.origin = None;
        self.delta = 0.0;
    }

    /// Offset that follows the pointer 1:1 up to the threshold and with
    /// resistance past it.
    pub fn follow_offset(&self, delta: f64) -> f64 {
        let magnitude = delta.abs();
        if magnitude <= self.threshold {
            delta
        } else {
            let damped = self.threshold + (magnitude - self.threshold) * self.resistance;
            damped.copysign(delta)
        }
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX, DEFAULT_DRAG_RESISTANCE)
    }
}

#[cfg(test)]
#[path = "gesture_tests.rs"]
mod tests;
