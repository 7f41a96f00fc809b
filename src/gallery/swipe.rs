// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe gesture recognizer.
//!
//! A drag is tracked only between press and release. On release, a drag
//! past the 50-pixel threshold yields exactly one navigation step in the
//! dragged direction, no matter how many move events arrived in between.

/// Minimum horizontal drag distance, in pixels, to trigger navigation.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Direction resolved from a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Dragged leftward: advance to the next slide.
    Next,
    /// Dragged rightward: go back to the previous slide.
    Previous,
}

/// Tracks one horizontal drag between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    current_x: f32,
}

impl SwipeTracker {
    /// Begins tracking at the press position.
    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.current_x = x;
    }

    /// Records a move. Ignored while no drag is active.
    pub fn update(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.current_x = x;
        }
    }

    /// Ends the drag, resolving it to at most one navigation step.
    pub fn finish(&mut self) -> Option<Swipe> {
        let start_x = self.start_x.take()?;
        let delta = start_x - self.current_x;
        if delta > SWIPE_THRESHOLD {
            Some(Swipe::Next)
        } else if delta < -SWIPE_THRESHOLD {
            Some(Swipe::Previous)
        } else {
            None
        }
    }

    /// Whether a drag is currently being tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }
}
