// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Touch swipe tracking for revealing a problem's actions.
//!
//! At most one problem is "swiped" at a time. A touch sequence that travels
//! far enough horizontally while staying close to its starting row either
//! reveals the touched problem (swipe left) or hides the revealed one
//! (swipe right). Anything else is treated as a scroll or tap.

use crate::problem::ProblemKey;

/// Horizontal travel, in pixels, that must be exceeded to count as a swipe.
pub const MIN_HORIZONTAL_DISTANCE: f64 = 80.0;

/// Vertical travel, in pixels, that must not be reached during a swipe.
pub const MAX_VERTICAL_DISTANCE: f64 = 50.0;

/// Effect of a finished touch sequence on the swiped problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeChange {
    Revealed(ProblemKey),
    Hidden,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Touch {
    key: ProblemKey,
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwipeTracker {
    touch: Option<Touch>,
    swiped: Option<ProblemKey>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The problem whose actions are currently revealed.
    pub fn swiped(&self) -> Option<ProblemKey> {
        self.swiped
    }

    pub fn is_swiped(&self, key: ProblemKey) -> bool {
        self.swiped == Some(key)
    }

    /// True while a touch sequence is in progress.
    pub fn is_tracking(&self) -> bool {
        self.touch.is_some()
    }

    pub fn touch_start(&mut self, key: ProblemKey, x: f64, y: f64) {
        self.touch = Some(Touch { key, x, y });
    }

    /// Returns true when the move belongs to a tracked sequence and default
    /// scrolling should be suppressed.
    pub fn touch_move(&mut self) -> bool {
        self.is_tracking()
    }

    /// Ends the current touch sequence at `(x, y)`.
    pub fn touch_end(&mut self, x: f64, y: f64) -> SwipeChange {
        let Some(start) = self.touch.take() else {
            return SwipeChange::Unchanged;
        };

        let dx = start.x - x;
        let dy = (start.y - y).abs();
        if dy >= MAX_VERTICAL_DISTANCE || dx.abs() <= MIN_HORIZONTAL_DISTANCE {
            return SwipeChange::Unchanged;
        }

        if dx > 0.0 {
            self.swiped = Some(start.key);
            SwipeChange::Revealed(start.key)
        } else {
            self.swiped = None;
            SwipeChange::Hidden
        }
    }

    /// Hides any revealed problem, as after a tap elsewhere. Returns true if
    /// one was revealed.
    pub fn clear(&mut self) -> bool {
        self.swiped.take().is_some()
    }
}

#[cfg(test)]
#[path = "swipe_tests.rs"]
mod tests;
