// SPDX-License-Identifier: MPL-2.0
//! The gallery component: a single authoritative index over a paged slide
//! strip, plus the navigation, pagination, gesture, and variant-filtering
//! behavior around it.
//!
//! The component follows the crate's `State`/`Message`/`Effect` convention:
//! every input arrives as a [`Message`] through [`Gallery::handle`], and
//! every externally observable consequence is returned as an [`Effect`].
//! Nothing is discovered at runtime — the product payload and the
//! pre-selected variant are injected at construction, and cross-component
//! notifications (thumbnail sync, variant application) travel through the
//! returned effects.

pub mod layout;
pub mod navigation;
pub mod pagination;
pub mod slides;
pub mod swipe;
pub mod view;

use crate::config::Settings;
use crate::product::{MediaId, OptionValueId, Product, VariantId};
use layout::LayoutParams;
use navigation::NavButtons;
use pagination::Pagination;
use slides::{RevealPlan, Slide, SlideList};
use swipe::{Swipe, SwipeTracker};
use std::time::Duration;
use tracing::debug;

/// Debounce applied to variant-selector change notifications.
pub const SELECTOR_SYNC_DELAY: Duration = Duration::from_millis(50);

/// Inputs consumed by [`Gallery::handle`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Advance one slide (next button, right arrow).
    NextSlide,
    /// Go back one slide (prev button, left arrow).
    PreviousSlide,
    /// Jump to a slide index; out-of-range values are clamped.
    SlideTo(usize),
    /// A pagination bullet was activated by click or Enter/Space.
    BulletPressed(usize),
    /// The viewport was resized to the given width.
    Resized(f32),
    /// A horizontal drag began at the given x position.
    DragStarted(f32),
    /// The drag moved to the given x position.
    DragMoved(f32),
    /// The drag ended.
    DragEnded,
    /// External notification that the active variant changed.
    VariantChanged(VariantId),
    /// External notification carrying the selected option-value ids.
    OptionValuesSelected(Vec<OptionValueId>),
    /// The variant selector changed; applied after [`SELECTOR_SYNC_DELAY`].
    SelectorChanged(VariantId),
    /// The selector debounce elapsed.
    SelectorSettled,
    /// Leave the filtered phase and restore the full slide set.
    ShowAllSlides,
    /// One staggered-reveal timer fired.
    RevealTick { generation: u64, slide: usize },
    /// The slide set was changed externally; recompute everything.
    Refresh,
}

/// Externally observable consequences of handling a [`Message`].
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The current index moved (or was re-applied). Carries the new index,
    /// the active slide, and the current slides-per-view.
    SlideChanged {
        index: usize,
        slide: Slide,
        slides_per_view: u32,
    },
    /// A variant's image set is now active; thumbnails must filter to it.
    VariantApplied(VariantId),
    /// The full slide set is active again; thumbnails must un-filter, and
    /// the shell must deliver the reveal plan's ticks back as
    /// [`Message::RevealTick`].
    AllSlidesShown { reveal: RevealPlan },
    /// The shell must send [`Message::SelectorSettled`] after
    /// [`SELECTOR_SYNC_DELAY`].
    ScheduleSelectorSync,
}

/// The gallery component state.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    settings: Settings,
    /// Product payload, read-only; `None` when the page embeds no data.
    product: Option<Product>,
    slides: SlideList,
    current_index: usize,
    viewport_width: f32,
    params: LayoutParams,
    /// Cached strip translation for the current index and width.
    translate_x: f32,
    pagination: Pagination,
    nav: NavButtons,
    swipe: SwipeTracker,
    current_variant: Option<VariantId>,
    pending_selector_variant: Option<VariantId>,
    /// Transition generation; reveal ticks from older generations are stale.
    reveal_generation: u64,
}

impl Gallery {
    /// Builds the gallery. With zero slides the component stays inert (no
    /// layout is computed and navigation messages are ignored) until a
    /// variant transition populates it.
    ///
    /// When a pre-selected variant is injected and that variant carries
    /// images, the gallery starts in the filtered phase and the returned
    /// effect reports the applied variant.
    pub fn new(
        settings: Settings,
        slides: Vec<Slide>,
        product: Option<Product>,
        preselected_variant: Option<VariantId>,
        viewport_width: f32,
    ) -> (Self, Effect) {
        let settings = settings.normalized();
        let params = LayoutParams::resolve(&settings, viewport_width);
        let mut gallery = Self {
            settings,
            product,
            slides: SlideList::new(slides),
            current_index: 0,
            viewport_width,
            params,
            translate_x: 0.0,
            pagination: Pagination::default(),
            nav: NavButtons::default(),
            swipe: SwipeTracker::default(),
            current_variant: None,
            pending_selector_variant: None,
            reveal_generation: 0,
        };
        if !gallery.slides.is_empty() {
            gallery.refresh();
        }
        let effect = match preselected_variant {
            Some(id) => gallery.filter_by_variant(id),
            None => Effect::None,
        };
        (gallery, effect)
    }

    /// Routes one input through the component.
    pub fn handle(&mut self, message: Message) -> Effect {
        if self.slides.is_empty() && !can_populate(&message) {
            return Effect::None;
        }
        match message {
            Message::NextSlide => self.next(),
            Message::PreviousSlide => self.prev(),
            Message::SlideTo(index) | Message::BulletPressed(index) => self.slide_to(index),
            Message::Resized(width) => {
                self.resize(width);
                Effect::None
            }
            Message::DragStarted(x) => {
                self.swipe.start(x);
                Effect::None
            }
            Message::DragMoved(x) => {
                self.swipe.update(x);
                Effect::None
            }
            Message::DragEnded => match self.swipe.finish() {
                Some(Swipe::Next) => self.next(),
                Some(Swipe::Previous) => self.prev(),
                None => Effect::None,
            },
            Message::VariantChanged(id) => self.filter_by_variant(id),
            Message::OptionValuesSelected(selected) => {
                let matched = self
                    .product
                    .as_ref()
                    .and_then(|product| product.variant_matching(&selected))
                    .map(|variant| variant.id);
                match matched {
                    Some(id) => self.filter_by_variant(id),
                    None => {
                        debug!("option selection matches no variant");
                        Effect::None
                    }
                }
            }
            Message::SelectorChanged(id) => {
                self.pending_selector_variant = Some(id);
                Effect::ScheduleSelectorSync
            }
            Message::SelectorSettled => match self.pending_selector_variant.take() {
                Some(id) => self.filter_by_variant(id),
                None => Effect::None,
            },
            Message::ShowAllSlides => self.show_all(),
            Message::RevealTick { generation, slide } => {
                if generation == self.reveal_generation {
                    self.slides.reveal(slide);
                } else {
                    debug!(generation, "discarding reveal tick from superseded transition");
                }
                Effect::None
            }
            Message::Refresh => {
                // Externally replaced slide set: recompute, and fall back to
                // the first slide if the index no longer exists.
                if self.current_index >= self.slides.len() {
                    self.current_index = 0;
                }
                self.params = LayoutParams::resolve(&self.settings, self.viewport_width);
                self.refresh();
                Effect::None
            }
        }
    }

    /// Jumps to the slide matching a thumbnail's identifiers. Variant
    /// thumbnails must match on both ids. Unmatched thumbnails are ignored.
    pub fn activate_thumbnail(
        &mut self,
        media_id: &MediaId,
        variant_id: Option<VariantId>,
    ) -> Effect {
        match self.slides.position_of(media_id, variant_id) {
            Some(index) => self.slide_to(index),
            None => {
                debug!(%media_id, "thumbnail matches no slide");
                Effect::None
            }
        }
    }

    fn next(&mut self) -> Effect {
        if self.current_index < self.max_index() {
            self.current_index += 1;
            self.refresh();
            self.slide_changed()
        } else {
            Effect::None
        }
    }

    fn prev(&mut self) -> Effect {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.refresh();
            self.slide_changed()
        } else {
            Effect::None
        }
    }

    /// Clamps and sets the index unconditionally; re-applying the current
    /// index re-renders idempotently and still notifies observers.
    fn slide_to(&mut self, index: usize) -> Effect {
        self.current_index = index.min(self.max_index());
        self.refresh();
        self.slide_changed()
    }

    fn resize(&mut self, width: f32) {
        self.viewport_width = width;
        let params = LayoutParams::resolve(&self.settings, width);
        if params != self.params {
            self.params = params;
            self.current_index = self.current_index.min(self.max_index());
            self.refresh();
        } else {
            // Same breakpoint parameters; only the pixel translation moves.
            self.translate_x = self
                .params
                .translate_x(self.current_index, self.viewport_width);
        }
    }

    fn filter_by_variant(&mut self, variant_id: VariantId) -> Effect {
        let Some(product) = &self.product else {
            debug!(%variant_id, "variant filter ignored: no product data");
            return Effect::None;
        };
        let Some(variant) = product.variant(variant_id) else {
            debug!(%variant_id, "variant filter ignored: unknown variant");
            return Effect::None;
        };
        if variant.images.is_empty() {
            debug!(%variant_id, "variant filter ignored: variant has no images");
            return Effect::None;
        }
        let variant = variant.clone();

        // Supersede any staggered reveal still in flight.
        self.reveal_generation += 1;
        self.slides.apply_variant(&variant);
        self.current_variant = Some(variant_id);
        self.current_index = 0;
        self.params = LayoutParams::resolve(&self.settings, self.viewport_width);
        self.refresh();
        Effect::VariantApplied(variant_id)
    }

    fn show_all(&mut self) -> Effect {
        self.current_variant = None;
        self.reveal_generation += 1;
        let reveal = self.slides.show_all(self.reveal_generation);
        self.current_index = 0;
        self.params = LayoutParams::resolve(&self.settings, self.viewport_width);
        self.refresh();
        Effect::AllSlidesShown { reveal }
    }

    /// Recomputes the transform, pagination, and navigation state from the
    /// current index, slide count, and layout parameters.
    fn refresh(&mut self) {
        self.translate_x = self
            .params
            .translate_x(self.current_index, self.viewport_width);
        self.pagination = Pagination::rebuild(
            self.settings.enable_pagination,
            self.slides.len(),
            &self.params,
            self.current_index,
        );
        self.nav = NavButtons::rebuild(
            self.settings.enable_navigation,
            self.slides.len(),
            &self.params,
            self.current_index,
        );
    }

    fn slide_changed(&self) -> Effect {
        match self.slides.get(self.current_index) {
            Some(slide) => Effect::SlideChanged {
                index: self.current_index,
                slide: slide.clone(),
                slides_per_view: self.params.slides_per_view,
            },
            None => Effect::None,
        }
    }

    // Accessors used by the view and the shell.

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn max_index(&self) -> usize {
        self.params.max_index(self.slides.len())
    }

    #[must_use]
    pub fn translate_x(&self) -> f32 {
        self.translate_x
    }

    #[must_use]
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    #[must_use]
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    #[must_use]
    pub fn slides(&self) -> &SlideList {
        &self.slides
    }

    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    #[must_use]
    pub fn nav_buttons(&self) -> &NavButtons {
        &self.nav
    }

    #[must_use]
    pub fn current_variant(&self) -> Option<VariantId> {
        self.current_variant
    }
}

/// Messages that may populate an empty gallery. Everything else is ignored
/// while no slides exist.
fn can_populate(message: &Message) -> bool {
    matches!(
        message,
        Message::VariantChanged(_)
            | Message::OptionValuesSelected(_)
            | Message::SelectorChanged(_)
            | Message::SelectorSettled
            | Message::Refresh
    )
}
