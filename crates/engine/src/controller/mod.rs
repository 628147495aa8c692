// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Carousel controller.
//!
//! [`CarouselController`] is a cheap, cloneable handle around one carousel's
//! state. Every public call locks the state, lets the [`machine`] decide what
//! happens, then delivers host calls with the lock released. Timer callbacks
//! hold only a weak reference, so dropping every handle silences them.

mod machine;
mod pause;

pub use machine::{Phase, Snapshot};
pub use pause::{PauseReason, PauseSet};

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::host::{CarouselHost, HostCall};
use crate::index::Step;
use crate::time::{Clock, ClockHandle};
use crate::timer::{TimerHandle, TimingSource};
use machine::{Effects, Machine, TimerKind};
use parking_lot::Mutex;
use slidekit_trace::{TraceEvent, TraceLog};
use std::sync::{Arc, Weak};
use std::time::Duration;

/// Name given to controllers built without one
pub const DEFAULT_NAME: &str = "carousel";

/// Handle to one carousel
#[derive(Clone)]
pub struct CarouselController {
    shared: Arc<Shared>,
}

/// Non-owning handle for adapters and callbacks
#[derive(Clone)]
pub struct WeakController {
    shared: Weak<Shared>,
}

impl WeakController {
    /// Get a strong handle if the carousel is still alive
    pub fn upgrade(&self) -> Option<CarouselController> {
        self.shared.upgrade().map(|shared| CarouselController { shared })
    }
}

struct Shared {
    name: String,
    host: Arc<dyn CarouselHost>,
    timer: Arc<dyn TimingSource>,
    clock: ClockHandle,
    trace: Option<TraceLog>,
    machine: Mutex<Machine>,
}

impl Shared {
    /// Run `f` against the locked state, then deliver any host calls it queued
    fn with_machine<R>(
        self: &Arc<Self>,
        f: impl FnOnce(&mut Machine, &mut Dispatch<'_>) -> R,
    ) -> R {
        let mut dispatch = Dispatch {
            shared: self,
            outbox: Vec::new(),
        };
        let result = {
            let mut machine = self.machine.lock();
            f(&mut machine, &mut dispatch)
        };
        let outbox = std::mem::take(&mut dispatch.outbox);
        self.flush(outbox);
        result
    }

    fn flush(&self, outbox: Vec<HostCall>) {
        for call in outbox {
            // A host callback may have disposed the carousel
            if self.machine.lock().is_disposed() {
                return;
            }
            call.deliver(self.host.as_ref());
        }
    }

    fn on_timer(self: &Arc<Self>, kind: TimerKind, token: u64) {
        self.with_machine(|m, fx| m.on_timer(kind, token, fx));
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        for handle in self.machine.get_mut().outstanding_timers() {
            self.timer.cancel(handle);
        }
    }
}

/// [`Effects`] sink bound to one locked call
struct Dispatch<'a> {
    shared: &'a Arc<Shared>,
    outbox: Vec<HostCall>,
}

impl Effects for Dispatch<'_> {
    fn schedule(&mut self, kind: TimerKind, delay: Duration, token: u64) -> TimerHandle {
        let weak = Arc::downgrade(self.shared);
        self.shared.timer.schedule(
            delay,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.on_timer(kind, token);
                }
            }),
        )
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.shared.timer.cancel(handle);
    }

    fn host(&mut self, call: HostCall) {
        self.outbox.push(call);
    }

    fn trace(&mut self, event: TraceEvent) {
        if let Some(log) = &self.shared.trace {
            log.record(&self.shared.name, self.shared.clock.now_millis(), event);
        }
    }
}

/// Builder for [`CarouselController`]
pub struct ControllerBuilder {
    config: CarouselConfig,
    host: Arc<dyn CarouselHost>,
    timer: Arc<dyn TimingSource>,
    name: String,
    clock: Option<ClockHandle>,
    trace: Option<TraceLog>,
}

impl ControllerBuilder {
    /// Label used in trace records
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Clock used to timestamp trace records (system clock by default)
    pub fn clock(mut self, clock: ClockHandle) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Record every decision into `trace`
    pub fn trace(mut self, trace: TraceLog) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Validate the config and build the controller
    pub fn build(self) -> Result<CarouselController, CarouselError> {
        self.config.validate()?;
        Ok(CarouselController {
            shared: Arc::new(Shared {
                name: self.name,
                host: self.host,
                timer: self.timer,
                clock: self.clock.unwrap_or_default(),
                trace: self.trace,
                machine: Mutex::new(Machine::new(self.config)),
            }),
        })
    }
}

impl CarouselController {
    /// Build a controller with default name, system clock and no trace
    pub fn new(
        config: CarouselConfig,
        host: Arc<dyn CarouselHost>,
        timer: Arc<dyn TimingSource>,
    ) -> Result<Self, CarouselError> {
        Self::builder(config, host, timer).build()
    }

    pub fn builder(
        config: CarouselConfig,
        host: Arc<dyn CarouselHost>,
        timer: Arc<dyn TimingSource>,
    ) -> ControllerBuilder {
        ControllerBuilder {
            config,
            host,
            timer,
            name: DEFAULT_NAME.to_string(),
            clock: None,
            trace: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    pub fn config(&self) -> CarouselConfig {
        self.shared.machine.lock().config().clone()
    }

    pub fn downgrade(&self) -> WeakController {
        WeakController {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Begin auto-advance when the config allows it
    pub fn start(&self) {
        self.shared.with_machine(|m, fx| m.start(fx));
    }

    /// Cancel every timer and stop; later calls do nothing
    pub fn dispose(&self) {
        self.shared.with_machine(|m, fx| m.dispose(fx));
    }

    pub fn next(&self) {
        self.shared.with_machine(|m, fx| m.user_step(Step::Forward, fx));
    }

    pub fn prev(&self) {
        self.shared.with_machine(|m, fx| m.user_step(Step::Backward, fx));
    }

    /// Jump to `index`.
    ///
    /// Fails with [`CarouselError::IndexOutOfRange`] for an index past the
    /// last slide, unless the controller is disposed.
    pub fn go_to(&self, index: usize) -> Result<(), CarouselError> {
        self.shared.with_machine(|m, fx| m.go_to(index, fx))
    }

    pub fn pause(&self, reason: impl Into<PauseReason>) {
        let reason = reason.into();
        self.shared.with_machine(|m, fx| m.pause(reason, fx));
    }

    pub fn resume(&self, reason: impl Into<PauseReason>) {
        let reason = reason.into();
        self.shared.with_machine(|m, fx| m.resume(&reason, fx));
    }

    /// Pointer entered (true) or left (false) the carousel
    pub fn set_hovered(&self, hovered: bool) {
        self.set_flag(PauseReason::HOVER, hovered);
    }

    /// Page became visible (true) or hidden (false)
    pub fn set_visible(&self, visible: bool) {
        self.set_flag(PauseReason::VISIBILITY, !visible);
    }

    /// A slide's media started (true) or stopped (false) playing
    pub fn set_media_playing(&self, playing: bool) {
        self.set_flag(PauseReason::MEDIA, playing);
    }

    fn set_flag(&self, reason: PauseReason, on: bool) {
        self.shared.with_machine(|m, fx| m.set_flag(reason, on, fx));
    }

    pub fn gesture_start(&self, x: f64) {
        self.shared.with_machine(|m, fx| m.gesture_start(x, fx));
    }

    pub fn gesture_move(&self, x: f64) {
        self.shared.with_machine(|m, fx| m.gesture_move(x, fx));
    }

    pub fn gesture_end(&self) {
        self.shared.with_machine(|m, fx| m.gesture_end(false, fx));
    }

    /// Pointer left the carousel or the touch was cancelled mid-drag
    pub fn gesture_cancel(&self) {
        self.shared.with_machine(|m, fx| m.gesture_end(true, fx));
    }

    /// Report the current viewport width to a responsive carousel
    pub fn set_viewport_width(&self, viewport_px: u32) {
        self.shared
            .with_machine(|m, fx| m.set_viewport_width(viewport_px, fx));
    }

    pub fn snapshot(&self) -> Snapshot {
        self.shared.machine.lock().snapshot()
    }

    pub fn current_index(&self) -> usize {
        self.shared.machine.lock().current()
    }

    pub fn phase(&self) -> Phase {
        self.shared.machine.lock().phase()
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.machine.lock().is_disposed()
    }

    /// Whether `reason` is currently holding auto-advance
    pub fn is_paused_by(&self, reason: impl Into<PauseReason>) -> bool {
        self.shared.machine.lock().holds(&reason.into())
    }
}

impl std::fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let machine = self.shared.machine.lock();
        f.debug_struct("CarouselController")
            .field("name", &self.shared.name)
            .field("index", &machine.current())
            .field("phase", &machine.phase())
            .finish()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
