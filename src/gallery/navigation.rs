// SPDX-License-Identifier: MPL-2.0
//! Prev/next button state.
//!
//! The disabled flags are a visual state only: presses still reach the
//! index controller, whose boundary guard makes them no-ops.

use crate::gallery::layout::LayoutParams;

/// Visual state of the prev/next navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavButtons {
    /// Hidden when disabled by configuration or when all slides fit in view.
    pub visible: bool,
    /// Prev shows its disabled state at index 0.
    pub prev_disabled: bool,
    /// Next shows its disabled state at the maximum index.
    pub next_disabled: bool,
}

impl NavButtons {
    /// Rebuilds the button state for the current slide count and index.
    #[must_use]
    pub fn rebuild(
        enabled: bool,
        total_slides: usize,
        params: &LayoutParams,
        current_index: usize,
    ) -> Self {
        if !enabled || total_slides <= params.slides_per_view as usize {
            return Self::default();
        }
        Self {
            visible: true,
            prev_disabled: current_index == 0,
            next_disabled: current_index >= params.max_index(total_slides),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: LayoutParams = LayoutParams {
        slides_per_view: 3,
        space_between: 20.0,
    };

    #[test]
    fn hidden_when_disabled_or_everything_fits() {
        assert!(!NavButtons::rebuild(false, 9, &PARAMS, 0).visible);
        assert!(!NavButtons::rebuild(true, 3, &PARAMS, 0).visible);
        assert!(!NavButtons::rebuild(true, 2, &PARAMS, 0).visible);
    }

    #[test]
    fn prev_disabled_at_start() {
        let nav = NavButtons::rebuild(true, 9, &PARAMS, 0);
        assert!(nav.visible);
        assert!(nav.prev_disabled);
        assert!(!nav.next_disabled);
    }

    #[test]
    fn next_disabled_at_max_index() {
        let nav = NavButtons::rebuild(true, 9, &PARAMS, 6);
        assert!(!nav.prev_disabled);
        assert!(nav.next_disabled);
    }

    #[test]
    fn both_enabled_in_the_middle() {
        let nav = NavButtons::rebuild(true, 9, &PARAMS, 3);
        assert!(!nav.prev_disabled);
        assert!(!nav.next_disabled);
    }
}
