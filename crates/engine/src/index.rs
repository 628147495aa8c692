// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Slide index arithmetic.
//!
//! [`IndexModel`] owns the current index and applies loop or clamp rules.
//! [`TrackLayout`] maps indices onto the physical slots of a clone-edge track
//! (`[last clone, slide 0, .., slide n-1, first clone]`).

use crate::error::CarouselError;

/// Direction of a single-step move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// Current index plus wraparound rules
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexModel {
    current: usize,
    count: usize,
    looping: bool,
}

impl IndexModel {
    /// Create a model at `start`; callers guarantee `start < count` when
    /// `count > 0`.
    pub fn new(count: usize, looping: bool, start: usize) -> Self {
        Self {
            current: if count == 0 { 0 } else { start.min(count - 1) },
            count,
            looping,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Whether there is more than one slide to move between
    pub fn can_rotate(&self) -> bool {
        self.count > 1
    }

    /// Index one step away from the current one, without committing it
    pub fn peek(&self, step: Step) -> usize {
        if !self.can_rotate() {
            return self.current;
        }
        match (step, self.looping) {
            (Step::Forward, true) => (self.current + 1) % self.count,
            (Step::Backward, true) => (self.current + self.count - 1) % self.count,
            (Step::Forward, false) => (self.current + 1).min(self.count - 1),
            (Step::Backward, false) => self.current.saturating_sub(1),
        }
    }

    /// Move forward. Returns the unchanged index at a non-looping boundary.
    pub fn advance(&mut self) -> usize {
        self.current = self.peek(Step::Forward);
        self.current
    }

    /// Move backward. Returns the unchanged index at a non-looping boundary.
    pub fn retreat(&mut self) -> usize {
        self.current = self.peek(Step::Backward);
        self.current
    }

    pub fn step(&mut self, step: Step) -> usize {
        match step {
            Step::Forward => self.advance(),
            Step::Backward => self.retreat(),
        }
    }

    /// Jump to `index`
    pub fn go_to(&mut self, index: usize) -> Result<usize, CarouselError> {
        self.check(index)?;
        self.current = index;
        Ok(self.current)
    }

    /// Validate an index without moving
    pub fn check(&self, index: usize) -> Result<(), CarouselError> {
        if index < self.count {
            Ok(())
        } else {
            Err(CarouselError::IndexOutOfRange {
                index,
                len: self.count,
            })
        }
    }

    /// Reset to the first slide
    pub fn rewind(&mut self) {
        self.current = 0;
    }
}

/// Animated move on a clone-edge track
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackMove {
    /// Slot to animate to
    pub target: usize,
    /// Real slot to snap to silently once the animation ends
    pub reanchor: Option<usize>,
}

/// Slot arithmetic for `[last clone, slide 0, .., slide n-1, first clone]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackLayout {
    count: usize,
}

impl TrackLayout {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Total number of slots, clones included
    pub fn slots(&self) -> usize {
        self.count + 2
    }

    /// Slot holding the real slide `index`
    pub fn slot_of(&self, index: usize) -> usize {
        index + 1
    }

    /// Whether `slot` holds a clone
    pub fn is_clone(&self, slot: usize) -> bool {
        slot == 0 || slot == self.count + 1
    }

    /// Slot of the real slide a clone stands in for
    pub fn real_slot(&self, slot: usize) -> usize {
        if slot == 0 {
            self.count
        } else if slot == self.count + 1 {
            1
        } else {
            slot
        }
    }

    /// Track move for a looping single step that starts on `from`.
    ///
    /// Wrapping off either end animates onto the adjacent clone and asks for
    /// a re-anchor onto the real slide it mirrors.
    pub fn step(&self, from: usize, step: Step) -> TrackMove {
        let target = match step {
            Step::Forward => self.slot_of(from) + 1,
            Step::Backward => self.slot_of(from) - 1,
        };
        TrackMove {
            target,
            reanchor: self.is_clone(target).then(|| self.real_slot(target)),
        }
    }

    /// Track move for a direct jump (never crosses a clone)
    pub fn jump(&self, to: usize) -> TrackMove {
        TrackMove {
            target: self.slot_of(to),
            reanchor: None,
        }
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
