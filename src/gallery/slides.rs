// SPDX-License-Identifier: MPL-2.0
//! The gallery's slide set and its two phases.
//!
//! In the default phase the full original slide list is active. Filtering by
//! a variant replaces the active set wholesale with slides synthesized from
//! that variant's images; returning to the default phase restores the
//! original list with a staggered reveal.
//!
//! The reveal is modeled as a [`RevealPlan`] tied to a generation counter.
//! Ticks delivered for a superseded generation are discarded, so a rapid
//! filter/unfilter sequence can never be overwritten by stale timers.

use crate::product::{normalize_image_url, MediaId, Variant, VariantId};
use std::time::Duration;

/// Delay between consecutive slide reveals when restoring the full set.
pub const REVEAL_STEP: Duration = Duration::from_millis(30);

/// One visible unit of gallery content.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// Media identifier shared with the matching thumbnail, if any.
    pub media_id: Option<MediaId>,
    /// Variant this slide belongs to, if it is variant-specific.
    pub variant_id: Option<VariantId>,
    /// Image source, already normalized to a secure URL.
    pub image_url: String,
    /// Alternative text (the variant title for synthesized slides).
    pub alt: String,
    /// Whether the image should be lazy-loaded.
    pub lazy: bool,
    /// Whether the slide is currently visible (toggled during reveals).
    pub visible: bool,
}

impl Slide {
    #[must_use]
    pub fn new(image_url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            media_id: None,
            variant_id: None,
            image_url: normalize_image_url(&image_url.into()),
            alt: alt.into(),
            lazy: false,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_media_id(mut self, media_id: MediaId) -> Self {
        self.media_id = Some(media_id);
        self
    }

    #[must_use]
    pub fn with_variant_id(mut self, variant_id: VariantId) -> Self {
        self.variant_id = Some(variant_id);
        self
    }
}

/// One step of a staggered reveal: make `slide` visible after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub slide: usize,
    pub delay: Duration,
}

/// Schedule for restoring the full slide list, tagged with the transition
/// generation that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPlan {
    pub generation: u64,
    pub steps: Vec<RevealStep>,
}

/// The full slide list plus the currently active view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlideList {
    /// Every slide from the original, unfiltered set.
    all: Vec<Slide>,
    /// Synthesized variant slides while filtered; `None` in the default phase.
    filtered: Option<Vec<Slide>>,
}

impl SlideList {
    #[must_use]
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            all: slides,
            filtered: None,
        }
    }

    /// The currently active slides: the synthesized variant set while
    /// filtered, the full list otherwise.
    #[must_use]
    pub fn active(&self) -> &[Slide] {
        match &self.filtered {
            Some(filtered) => filtered,
            None => &self.all,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.active().get(index)
    }

    /// Returns `true` while a variant's synthesized set is active.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.filtered.is_some()
    }

    /// Replaces the active set with slides synthesized from the variant's
    /// images: one slide per image, in order, tagged with the variant id,
    /// lazy-loading all but the first.
    ///
    /// The caller must check beforehand that the variant has images.
    pub fn apply_variant(&mut self, variant: &Variant) {
        let slides = variant
            .images
            .iter()
            .enumerate()
            .map(|(index, url)| Slide {
                media_id: None,
                variant_id: Some(variant.id),
                image_url: normalize_image_url(url),
                alt: variant.title.clone(),
                lazy: index > 0,
                visible: true,
            })
            .collect();
        self.filtered = Some(slides);
    }

    /// Leaves the filtered phase and hides every original slide, returning
    /// the staggered plan that re-reveals them one by one.
    pub fn show_all(&mut self, generation: u64) -> RevealPlan {
        self.filtered = None;
        for slide in &mut self.all {
            slide.visible = false;
        }
        let steps = (0..self.all.len())
            .map(|slide| RevealStep {
                slide,
                delay: REVEAL_STEP * slide as u32,
            })
            .collect();
        RevealPlan { generation, steps }
    }

    /// Applies one reveal step. Out-of-range indices are ignored.
    pub fn reveal(&mut self, slide: usize) {
        if let Some(slide) = self.all.get_mut(slide) {
            slide.visible = true;
        }
    }

    /// Finds the active slide matching a thumbnail's identifiers. Variant
    /// thumbnails must match on both ids; plain media thumbnails match on
    /// the media id alone.
    #[must_use]
    pub fn position_of(&self, media_id: &MediaId, variant_id: Option<VariantId>) -> Option<usize> {
        self.active().iter().position(|slide| match variant_id {
            Some(variant_id) => {
                slide.media_id.as_ref() == Some(media_id) && slide.variant_id == Some(variant_id)
            }
            None => slide.media_id.as_ref() == Some(media_id),
        })
    }
}
