// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named, nestable pause reasons.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Why auto-advance is held
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PauseReason(Cow<'static, str>);

impl PauseReason {
    /// Pointer is over the carousel
    pub const HOVER: PauseReason = PauseReason(Cow::Borrowed("hover"));
    /// Page/tab is hidden
    pub const VISIBILITY: PauseReason = PauseReason(Cow::Borrowed("visibility"));
    /// User is dragging
    pub const DRAG: PauseReason = PauseReason(Cow::Borrowed("drag"));
    /// A slide's video is playing
    pub const MEDIA: PauseReason = PauseReason(Cow::Borrowed("media"));
    /// Viewport is outside the responsive breakpoint
    pub const RESPONSIVE: PauseReason = PauseReason(Cow::Borrowed("responsive"));

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PauseReason {
    fn from(s: &str) -> Self {
        Self(Cow::Owned(s.to_string()))
    }
}

impl From<String> for PauseReason {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

impl std::fmt::Display for PauseReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Multiset of active pause reasons.
///
/// The same reason may be held more than once; each `release` undoes one
/// `hold`. Releasing a reason that is not held does nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PauseSet {
    held: BTreeMap<PauseReason, usize>,
}

impl PauseSet {
    /// Hold `reason`; returns the new depth
    pub fn hold(&mut self, reason: PauseReason) -> usize {
        *self.held.entry(reason).or_insert(0) += 1;
        self.depth()
    }

    /// Release one hold of `reason`; returns the new depth, or None if the
    /// reason was not held.
    pub fn release(&mut self, reason: &PauseReason) -> Option<usize> {
        let count = self.held.get_mut(reason)?;
        *count -= 1;
        if *count == 0 {
            self.held.remove(reason);
        }
        Some(self.depth())
    }

    pub fn holds(&self, reason: &PauseReason) -> bool {
        self.held.contains_key(reason)
    }

    /// Total number of outstanding holds
    pub fn depth(&self) -> usize {
        self.held.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Reasons currently held, in name order
    pub fn reasons(&self) -> Vec<PauseReason> {
        self.held.keys().cloned().collect()
    }
}

#[cfg(test)]
#[path = "pause_tests.rs"]
mod tests;
