// SPDX-License-Identifier: MPL-2.0
//! Thumbnail strip bridged to the gallery.
//!
//! The strip mirrors the gallery's media items. On every slide change the
//! shell routes the active slide's identifiers here to move the current
//! marker; on a thumbnail press the strip resolves the identifiers and the
//! shell drives [`crate::gallery::Gallery::activate_thumbnail`] with them.
//! Variant thumbnails additionally announce the pressed variant so external
//! consumers (the variant selector) can react.

use crate::product::{MediaId, VariantId};
use tracing::debug;

/// One thumbnail in the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailItem {
    pub media_id: Option<MediaId>,
    /// Set for variant-specific thumbnails.
    pub variant_id: Option<VariantId>,
    /// Hidden while a non-matching variant filter is active.
    pub visible: bool,
    /// Whether this thumbnail carries the current marker.
    pub active: bool,
}

impl ThumbnailItem {
    #[must_use]
    pub fn new(media_id: MediaId) -> Self {
        Self {
            media_id: Some(media_id),
            variant_id: None,
            visible: true,
            active: false,
        }
    }

    #[must_use]
    pub fn with_variant_id(mut self, variant_id: VariantId) -> Self {
        self.variant_id = Some(variant_id);
        self
    }
}

/// Inputs consumed by [`ThumbnailStrip::handle`].
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was pressed.
    Pressed(usize),
}

/// Externally observable consequences of a thumbnail press.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The shell must drive the gallery to the matching slide. For variant
    /// thumbnails it must also emit the variant-image-clicked notification.
    Activate {
        media_id: MediaId,
        variant_id: Option<VariantId>,
    },
}

/// The external thumbnail list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThumbnailStrip {
    items: Vec<ThumbnailItem>,
    /// Thumbnails shown per strip page.
    per_page: usize,
    page_count: usize,
}

impl ThumbnailStrip {
    #[must_use]
    pub fn new(items: Vec<ThumbnailItem>, per_page: usize) -> Self {
        let mut strip = Self {
            items,
            per_page: per_page.max(1),
            page_count: 1,
        };
        strip.reset_pages();
        strip
    }

    /// Handles a thumbnail press. Hidden thumbnails and items without a
    /// media id resolve to nothing.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Pressed(index) => {
                let Some(item) = self.items.get(index).filter(|item| item.visible) else {
                    return Effect::None;
                };
                match &item.media_id {
                    Some(media_id) => Effect::Activate {
                        media_id: media_id.clone(),
                        variant_id: item.variant_id,
                    },
                    None => {
                        debug!(index, "pressed thumbnail has no media id");
                        Effect::None
                    }
                }
            }
        }
    }

    /// Moves the current marker to the thumbnail matching the active slide,
    /// clearing it from all siblings first. Slides carrying a variant id
    /// must match on both identifiers.
    pub fn mark_active(&mut self, media_id: Option<&MediaId>, variant_id: Option<VariantId>) {
        for item in &mut self.items {
            item.active = false;
        }
        let Some(media_id) = media_id else {
            return;
        };
        let matching = self.items.iter_mut().find(|item| match variant_id {
            Some(variant_id) => {
                item.media_id.as_ref() == Some(media_id) && item.variant_id == Some(variant_id)
            }
            None => item.media_id.as_ref() == Some(media_id),
        });
        if let Some(item) = matching {
            item.active = true;
        }
    }

    /// Shows only thumbnails tagged with the given variant, hiding all
    /// others (plain product images included).
    pub fn filter_by_variant(&mut self, variant_id: VariantId) {
        for item in &mut self.items {
            item.visible = item.variant_id == Some(variant_id);
        }
        self.reset_pages();
    }

    /// Restores visibility of every thumbnail.
    pub fn show_all(&mut self) {
        for item in &mut self.items {
            item.visible = true;
        }
        self.reset_pages();
    }

    /// Recomputes the strip's page count from the visible items.
    fn reset_pages(&mut self) {
        let visible = self.items.iter().filter(|item| item.visible).count();
        self.page_count = visible.div_ceil(self.per_page).max(1);
    }

    #[must_use]
    pub fn items(&self) -> &[ThumbnailItem] {
        &self.items
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> ThumbnailStrip {
        let mut items: Vec<ThumbnailItem> = (0..4)
            .map(|i| ThumbnailItem::new(MediaId::new(format!("m{i}"))))
            .collect();
        items.push(
            ThumbnailItem::new(MediaId::new("m1")).with_variant_id(VariantId::new(101)),
        );
        ThumbnailStrip::new(items, 4)
    }

    #[test]
    fn press_resolves_identifiers() {
        let mut strip = strip();
        let effect = strip.handle(Message::Pressed(2));
        assert_eq!(
            effect,
            Effect::Activate {
                media_id: MediaId::new("m2"),
                variant_id: None,
            }
        );

        let effect = strip.handle(Message::Pressed(4));
        assert_eq!(
            effect,
            Effect::Activate {
                media_id: MediaId::new("m1"),
                variant_id: Some(VariantId::new(101)),
            }
        );
    }

    #[test]
    fn press_out_of_range_is_ignored() {
        let mut strip = strip();
        assert_eq!(strip.handle(Message::Pressed(99)), Effect::None);
    }

    #[test]
    fn press_on_hidden_thumbnail_is_ignored() {
        let mut strip = strip();
        strip.filter_by_variant(VariantId::new(101));
        assert_eq!(strip.handle(Message::Pressed(0)), Effect::None);
    }

    #[test]
    fn mark_active_clears_siblings_first() {
        let mut strip = strip();
        strip.mark_active(Some(&MediaId::new("m2")), None);
        assert_eq!(strip.active_index(), Some(2));

        strip.mark_active(Some(&MediaId::new("m3")), None);
        assert_eq!(strip.active_index(), Some(3));
        assert_eq!(strip.items().iter().filter(|i| i.active).count(), 1);
    }

    #[test]
    fn mark_active_prefers_the_variant_thumbnail() {
        let mut strip = strip();
        strip.mark_active(Some(&MediaId::new("m1")), Some(VariantId::new(101)));
        assert_eq!(strip.active_index(), Some(4));

        strip.mark_active(Some(&MediaId::new("m1")), None);
        assert_eq!(strip.active_index(), Some(1));
    }

    #[test]
    fn mark_active_with_no_media_only_clears() {
        let mut strip = strip();
        strip.mark_active(Some(&MediaId::new("m2")), None);
        strip.mark_active(None, None);
        assert_eq!(strip.active_index(), None);
    }

    #[test]
    fn variant_filter_hides_everything_else() {
        let mut strip = strip();
        strip.filter_by_variant(VariantId::new(101));
        let visible: Vec<bool> = strip.items().iter().map(|i| i.visible).collect();
        assert_eq!(visible, vec![false, false, false, false, true]);

        strip.show_all();
        assert!(strip.items().iter().all(|i| i.visible));
    }

    #[test]
    fn page_count_follows_visibility() {
        let mut strip = strip();
        assert_eq!(strip.page_count(), 2, "5 visible items, 4 per page");

        strip.filter_by_variant(VariantId::new(101));
        assert_eq!(strip.page_count(), 1);

        strip.filter_by_variant(VariantId::new(999));
        assert_eq!(strip.page_count(), 1, "never below one page");
    }
}
