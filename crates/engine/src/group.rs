// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Registry of the carousels living on one page.
//!
//! Adapters receive a `CarouselGroup` instead of reaching for globals. The
//! group also fans page-wide signals (tab visibility, teardown) out to every
//! member.

use crate::controller::{CarouselController, PauseReason};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Named set of carousel controllers
#[derive(Default)]
pub struct CarouselGroup {
    members: RwLock<BTreeMap<String, CarouselController>>,
}

impl CarouselGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller under its own name.
    ///
    /// Returns the controller previously registered under that name, which
    /// is left running; dispose it if it is no longer wanted.
    pub fn insert(&self, controller: CarouselController) -> Option<CarouselController> {
        self.members
            .write()
            .insert(controller.name().to_string(), controller)
    }

    pub fn get(&self, name: &str) -> Option<CarouselController> {
        self.members.read().get(name).cloned()
    }

    /// Unregister and dispose a controller
    pub fn remove(&self, name: &str) -> Option<CarouselController> {
        let removed = self.members.write().remove(name);
        if let Some(ref ctl) = removed {
            ctl.dispose();
        }
        removed
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        self.members.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.read().is_empty()
    }

    pub fn start_all(&self) {
        for ctl in self.snapshot() {
            ctl.start();
        }
    }

    /// Page visibility changed
    pub fn set_visible(&self, visible: bool) {
        for ctl in self.snapshot() {
            ctl.set_visible(visible);
        }
    }

    /// Viewport resized
    pub fn set_viewport_width(&self, viewport_px: u32) {
        for ctl in self.snapshot() {
            ctl.set_viewport_width(viewport_px);
        }
    }

    pub fn pause_all(&self, reason: impl Into<PauseReason>) {
        let reason = reason.into();
        for ctl in self.snapshot() {
            ctl.pause(reason.clone());
        }
    }

    pub fn resume_all(&self, reason: impl Into<PauseReason>) {
        let reason = reason.into();
        for ctl in self.snapshot() {
            ctl.resume(reason.clone());
        }
    }

    /// Dispose every member and empty the group
    pub fn dispose_all(&self) {
        let members = std::mem::take(&mut *self.members.write());
        for ctl in members.into_values() {
            ctl.dispose();
        }
    }

    /// Clone the member list so controller calls run without the group lock
    fn snapshot(&self) -> Vec<CarouselController> {
        self.members.read().values().cloned().collect()
    }
}

impl std::fmt::Debug for CarouselGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselGroup")
            .field("members", &self.names())
            .finish()
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
