// SPDX-License-Identifier: MPL-2.0
//! Pagination bullets, rebuilt from scratch on every update.

use crate::gallery::layout::LayoutParams;

/// One pagination indicator representing one scroll page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    /// Page index the bullet navigates to.
    pub page: usize,
    /// Whether this bullet marks the current index.
    pub active: bool,
}

/// The bullet row below the slide strip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pagination {
    /// Hidden when disabled by configuration or when only one page exists.
    pub visible: bool,
    pub bullets: Vec<Bullet>,
}

impl Pagination {
    /// Rebuilds the bullet row for the current slide count and index.
    #[must_use]
    pub fn rebuild(
        enabled: bool,
        total_slides: usize,
        params: &LayoutParams,
        current_index: usize,
    ) -> Self {
        if !enabled {
            return Self::default();
        }
        let pages = params.page_count(total_slides);
        if pages <= 1 {
            return Self::default();
        }
        Self {
            visible: true,
            bullets: (0..pages)
                .map(|page| Bullet {
                    page,
                    active: page == current_index,
                })
                .collect(),
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
    fn bullet_count_is_pages() {
        let pagination = Pagination::rebuild(true, 9, &PARAMS, 0);
        assert!(pagination.visible);
        assert_eq!(pagination.bullets.len(), 7);
    }

    #[test]
    fn hidden_when_disabled() {
        let pagination = Pagination::rebuild(false, 9, &PARAMS, 0);
        assert!(!pagination.visible);
        assert!(pagination.bullets.is_empty());
    }

    #[test]
    fn hidden_when_single_page() {
        let pagination = Pagination::rebuild(true, 3, &PARAMS, 0);
        assert!(!pagination.visible);
        let pagination = Pagination::rebuild(true, 0, &PARAMS, 0);
        assert!(!pagination.visible);
    }

    #[test]
    fn active_bullet_tracks_current_index() {
        let pagination = Pagination::rebuild(true, 9, &PARAMS, 4);
        let active: Vec<usize> = pagination
            .bullets
            .iter()
            .filter(|b| b.active)
            .map(|b| b.page)
            .collect();
        assert_eq!(active, vec![4]);
    }
}
