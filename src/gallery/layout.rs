// SPDX-License-Identifier: MPL-2.0
//! Layout math for the paged slide strip.
//!
//! Everything here is a pure function of the resolved breakpoint parameters,
//! the container width, and the current index, so layout and transform
//! updates are idempotent given identical inputs.

use crate::config::Settings;
use std::time::Duration;

/// Viewport width at or above which the desktop configuration applies.
pub const DESKTOP_MIN_WIDTH: f32 = 990.0;
/// Viewport width at or above which the tablet configuration applies.
pub const TABLET_MIN_WIDTH: f32 = 750.0;

/// Fixed duration of the strip's translation transition.
pub const TRANSITION: Duration = Duration::from_millis(300);

/// Viewport-width band driving layout configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    /// Resolves the breakpoint for a viewport width using fixed thresholds.
    #[must_use]
    pub fn for_width(width: f32) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            Self::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Mobile
        }
    }
}

/// Layout parameters in effect for the current breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Number of slides simultaneously visible.
    pub slides_per_view: u32,
    /// Horizontal gap between adjacent slides, in pixels.
    pub space_between: f32,
}

impl LayoutParams {
    /// Resolves the parameters for the current viewport width.
    #[must_use]
    pub fn resolve(settings: &Settings, viewport_width: f32) -> Self {
        let bp = match Breakpoint::for_width(viewport_width) {
            Breakpoint::Desktop => settings.desktop,
            Breakpoint::Tablet => settings.tablet,
            Breakpoint::Mobile => settings.mobile,
        };
        Self {
            slides_per_view: bp.slides_per_view.max(1),
            space_between: bp.space_between.max(0.0),
        }
    }

    /// Highest index the gallery may scroll to: `max(0, total − slides_per_view)`.
    #[must_use]
    pub fn max_index(&self, total_slides: usize) -> usize {
        total_slides.saturating_sub(self.slides_per_view as usize)
    }

    /// Number of pagination pages: `max(1, total − slides_per_view + 1)`.
    #[must_use]
    pub fn page_count(&self, total_slides: usize) -> usize {
        (total_slides + 1)
            .saturating_sub(self.slides_per_view as usize)
            .max(1)
    }

    /// Width of one slide as a percentage of the container:
    /// `(100 − (spv−1) × (space / container × 100)) / spv`.
    #[must_use]
    pub fn slide_width_percent(&self, container_width: f32) -> f32 {
        let spv = self.slides_per_view as f32;
        if container_width <= 0.0 {
            return 100.0 / spv;
        }
        let space_percent = self.space_between / container_width * 100.0;
        (100.0 - (spv - 1.0) * space_percent) / spv
    }

    /// Width of one slide in pixels.
    #[must_use]
    pub fn slide_width_px(&self, container_width: f32) -> f32 {
        container_width * self.slide_width_percent(container_width) / 100.0
    }

    /// Horizontal translation of the strip for the given index:
    /// `−index × (slide_width_px + space)`.
    #[must_use]
    pub fn translate_x(&self, index: usize, container_width: f32) -> f32 {
        -(index as f32) * (self.slide_width_px(container_width) + self.space_between)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BreakpointSettings;
    use crate::test_utils::assert_abs_diff_eq;

    fn settings() -> Settings {
        Settings {
            desktop: BreakpointSettings::new(3, 20.0),
            tablet: BreakpointSettings::new(2, 15.0),
            mobile: BreakpointSettings::new(1, 10.0),
            enable_pagination: true,
            enable_navigation: true,
        }
    }

    #[test]
    fn breakpoints_use_fixed_thresholds() {
        assert_eq!(Breakpoint::for_width(1200.0), Breakpoint::Desktop);
        assert_eq!(Breakpoint::for_width(990.0), Breakpoint::Desktop);
        assert_eq!(Breakpoint::for_width(989.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(750.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::for_width(749.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::for_width(320.0), Breakpoint::Mobile);
    }

    #[test]
    fn resolve_picks_the_breakpoint_settings() {
        let params = LayoutParams::resolve(&settings(), 1000.0);
        assert_eq!(params.slides_per_view, 3);
        assert_abs_diff_eq!(params.space_between, 20.0);

        let params = LayoutParams::resolve(&settings(), 800.0);
        assert_eq!(params.slides_per_view, 2);

        let params = LayoutParams::resolve(&settings(), 400.0);
        assert_eq!(params.slides_per_view, 1);
    }

    #[test]
    fn max_index_saturates_at_zero() {
        let params = LayoutParams {
            slides_per_view: 3,
            space_between: 20.0,
        };
        assert_eq!(params.max_index(9), 6);
        assert_eq!(params.max_index(3), 0);
        assert_eq!(params.max_index(2), 0);
        assert_eq!(params.max_index(0), 0);
    }

    #[test]
    fn page_count_is_at_least_one() {
        let params = LayoutParams {
            slides_per_view: 3,
            space_between: 20.0,
        };
        assert_eq!(params.page_count(9), 7);
        assert_eq!(params.page_count(3), 1);
        assert_eq!(params.page_count(1), 1);
        assert_eq!(params.page_count(0), 1);
    }

    #[test]
    fn slide_width_formula_matches_reference_scenario() {
        // 1000px container, 3 per view, 20px spacing:
        // (100 - 2 * (20 / 1000 * 100)) / 3 = 32%
        let params = LayoutParams {
            slides_per_view: 3,
            space_between: 20.0,
        };
        assert_abs_diff_eq!(params.slide_width_percent(1000.0), 32.0, epsilon = 1e-4);
        assert_abs_diff_eq!(params.slide_width_px(1000.0), 320.0, epsilon = 1e-3);
    }

    #[test]
    fn translate_moves_by_slide_width_plus_spacing() {
        let params = LayoutParams {
            slides_per_view: 3,
            space_between: 20.0,
        };
        assert_abs_diff_eq!(params.translate_x(0, 1000.0), 0.0);
        assert_abs_diff_eq!(params.translate_x(1, 1000.0), -340.0, epsilon = 1e-3);
        assert_abs_diff_eq!(params.translate_x(6, 1000.0), -2040.0, epsilon = 1e-2);
    }

    #[test]
    fn zero_width_container_does_not_divide_by_zero() {
        let params = LayoutParams {
            slides_per_view: 4,
            space_between: 20.0,
        };
        assert_abs_diff_eq!(params.slide_width_percent(0.0), 25.0);
    }
}
