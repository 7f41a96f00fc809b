// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the gallery, the thumbnail strip, and a variant
//! picker into one Iced program.
//!
//! The shell owns nothing the components need to discover at runtime: the
//! product payload and settings are loaded here and injected at
//! construction, effects returned by the components are routed between
//! them, and the only timers (the selector debounce and the staggered
//! reveal) are `Task`s that deliver plain messages back into the loop.

mod subscription;

use crate::config::{self, Settings};
use crate::error::Result;
use crate::gallery::{self, slides::Slide, Gallery, SELECTOR_SYNC_DELAY};
use crate::product::{MediaId, Product, VariantId};
use crate::thumbnails::{self, ThumbnailItem, ThumbnailStrip};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, mouse, Element, Event, Length, Subscription, Task};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Sample payload used when no `--product` file is given.
const SAMPLE_PRODUCT_JSON: &str = include_str!("../../demos/product.json");

/// Thumbnails shown per strip page.
const THUMBNAILS_PER_PAGE: usize = 6;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1000.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Path to a product JSON file.
    pub product: Option<PathBuf>,
    /// Path to a gallery settings TOML file.
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Thumbnails(thumbnails::Message),
    /// The demo's variant picker changed selection.
    VariantPicked(VariantId),
    /// The "show all" control was pressed.
    ShowAllPressed,
    /// The selector debounce elapsed.
    SelectorSyncElapsed,
    /// One staggered-reveal timer fired.
    RevealTick { generation: u64, slide: usize },
    /// Raw native event forwarded by the subscription.
    RawEvent(Event),
}

/// Root application state bridging the gallery and its collaborators.
#[derive(Debug)]
pub struct App {
    gallery: Gallery,
    thumbnails: ThumbnailStrip,
    /// Picker entries: every variant with its title.
    variants: Vec<(VariantId, String)>,
    cursor_x: f32,
    dragging: bool,
    /// Last external notification, shown in the footer.
    status: String,
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let settings = load_settings(&flags);
        let product = load_product(&flags);

        let (slides, items) = product
            .as_ref()
            .map(build_media)
            .unwrap_or_default();
        let variants = product
            .as_ref()
            .map(|product| {
                product
                    .variants
                    .iter()
                    .map(|variant| (variant.id, variant.title.clone()))
                    .collect()
            })
            .unwrap_or_default();

        let (gallery, effect) =
            Gallery::new(settings, slides, product, None, WINDOW_DEFAULT_WIDTH);
        let mut app = Self {
            gallery,
            thumbnails: ThumbnailStrip::new(items, THUMBNAILS_PER_PAGE),
            variants,
            cursor_x: 0.0,
            dragging: false,
            status: String::new(),
        };
        let task = app.run_gallery_effect(effect);
        (app, task)
    }

    fn title(&self) -> String {
        "Iced Gallery".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => {
                let effect = self.gallery.handle(message);
                self.run_gallery_effect(effect)
            }
            Message::Thumbnails(message) => match self.thumbnails.handle(message) {
                thumbnails::Effect::Activate {
                    media_id,
                    variant_id,
                } => {
                    let effect = self.gallery.activate_thumbnail(&media_id, variant_id);
                    let task = self.run_gallery_effect(effect);
                    if let Some(variant_id) = variant_id {
                        // The variant-image-clicked notification for
                        // external consumers, emitted after the slide
                        // change; the demo surfaces it in the footer.
                        self.status = format!("variant image clicked: {variant_id}");
                    }
                    task
                }
                thumbnails::Effect::None => Task::none(),
            },
            Message::VariantPicked(id) => {
                let effect = self.gallery.handle(gallery::Message::SelectorChanged(id));
                self.run_gallery_effect(effect)
            }
            Message::ShowAllPressed => {
                let effect = self.gallery.handle(gallery::Message::ShowAllSlides);
                self.run_gallery_effect(effect)
            }
            Message::SelectorSyncElapsed => {
                let effect = self.gallery.handle(gallery::Message::SelectorSettled);
                self.run_gallery_effect(effect)
            }
            Message::RevealTick { generation, slide } => {
                let effect = self
                    .gallery
                    .handle(gallery::Message::RevealTick { generation, slide });
                self.run_gallery_effect(effect)
            }
            Message::RawEvent(event) => self.handle_raw_event(event),
        }
    }

    /// Routes a gallery effect to the other components and schedules any
    /// required timers.
    fn run_gallery_effect(&mut self, effect: gallery::Effect) -> Task<Message> {
        match effect {
            gallery::Effect::None => Task::none(),
            gallery::Effect::SlideChanged {
                index,
                slide,
                slides_per_view,
            } => {
                self.thumbnails
                    .mark_active(slide.media_id.as_ref(), slide.variant_id);
                self.status = format!(
                    "slide {} of {} ({slides_per_view} per view)",
                    index + 1,
                    self.gallery.slides().len(),
                );
                Task::none()
            }
            gallery::Effect::VariantApplied(variant_id) => {
                self.thumbnails.filter_by_variant(variant_id);
                self.status = format!("showing variant {variant_id}");
                Task::none()
            }
            gallery::Effect::AllSlidesShown { reveal } => {
                self.thumbnails.show_all();
                self.status = "showing all slides".to_string();
                let generation = reveal.generation;
                Task::batch(reveal.steps.into_iter().map(move |step| {
                    Task::perform(tokio::time::sleep(step.delay), move |()| {
                        Message::RevealTick {
                            generation,
                            slide: step.slide,
                        }
                    })
                }))
            }
            gallery::Effect::ScheduleSelectorSync => {
                Task::perform(tokio::time::sleep(SELECTOR_SYNC_DELAY), |()| {
                    Message::SelectorSyncElapsed
                })
            }
        }
    }

    fn handle_raw_event(&mut self, event: Event) -> Task<Message> {
        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor_x = position.x;
                if self.dragging {
                    return self.forward(gallery::Message::DragMoved(position.x));
                }
                Task::none()
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                self.dragging = true;
                self.forward(gallery::Message::DragStarted(self.cursor_x))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.dragging = false;
                self.forward(gallery::Message::DragEnded)
            }
            _ => Task::none(),
        }
    }

    fn forward(&mut self, message: gallery::Message) -> Task<Message> {
        let effect = self.gallery.handle(message);
        self.run_gallery_effect(effect)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn view(&self) -> Element<'_, Message> {
        let gallery_view = gallery::view::view(&self.gallery).map(Message::Gallery);

        let content = Column::new()
            .spacing(16)
            .align_x(alignment::Horizontal::Center)
            .push(gallery_view)
            .push(self.thumbnail_row())
            .push(self.variant_picker())
            .push(Text::new(self.status.as_str()).size(13));

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(16)
            .align_x(alignment::Horizontal::Center)
            .into()
    }

    fn thumbnail_row(&self) -> Element<'_, Message> {
        let mut row = Row::new().spacing(8);
        for (index, item) in self.thumbnails.items().iter().enumerate() {
            if !item.visible {
                continue;
            }
            let label = item
                .media_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default();
            let style = if item.active {
                button::primary
            } else {
                button::secondary
            };
            row = row.push(
                button(Text::new(label).size(12))
                    .padding([4, 8])
                    .style(style)
                    .on_press(Message::Thumbnails(thumbnails::Message::Pressed(index))),
            );
        }
        row.into()
    }

    fn variant_picker(&self) -> Element<'_, Message> {
        let mut row = Row::new().spacing(8);
        for (id, title) in &self.variants {
            let selected = self.gallery.current_variant() == Some(*id);
            let style = if selected {
                button::primary
            } else {
                button::secondary
            };
            row = row.push(
                button(Text::new(title.as_str()).size(13))
                    .padding([4, 10])
                    .style(style)
                    .on_press(Message::VariantPicked(*id)),
            );
        }
        row = row.push(
            button(Text::new("Show all").size(13))
                .padding([4, 10])
                .style(button::text)
                .on_press(Message::ShowAllPressed),
        );
        row.into()
    }
}

fn load_settings(flags: &Flags) -> Settings {
    let loaded = match &flags.config {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        warn!(%err, "falling back to default gallery settings");
        Settings::default()
    })
}

fn load_product(flags: &Flags) -> Option<Product> {
    let parsed: Result<Product> = match &flags.product {
        Some(path) => fs::read_to_string(path)
            .map_err(Into::into)
            .and_then(|json| Product::from_json(&json)),
        None => Product::from_json(SAMPLE_PRODUCT_JSON),
    };
    match parsed {
        Ok(product) => Some(product),
        Err(err) => {
            warn!(%err, "product payload unavailable; variant filtering disabled");
            None
        }
    }
}

/// Builds the default slide set and its mirroring thumbnails from the
/// product payload: one slide per variant image, tagged with both ids.
fn build_media(product: &Product) -> (Vec<Slide>, Vec<ThumbnailItem>) {
    let mut slides = Vec::new();
    let mut items = Vec::new();
    for variant in &product.variants {
        for (index, url) in variant.images.iter().enumerate() {
            let media_id = MediaId::new(format!("{}-{index}", variant.id));
            slides.push(
                Slide::new(url.as_str(), variant.title.as_str())
                    .with_media_id(media_id.clone())
                    .with_variant_id(variant.id),
            );
            items.push(ThumbnailItem::new(media_id).with_variant_id(variant.id));
        }
    }
    (slides, items)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(iced::window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..iced::window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let (app, _task) = App::new(Flags::default());
        app
    }

    #[test]
    fn sample_product_parses_and_builds_media() {
        let product =
            Product::from_json(SAMPLE_PRODUCT_JSON).expect("bundled sample should parse");
        assert!(!product.variants.is_empty());
        let (slides, items) = build_media(&product);
        assert_eq!(slides.len(), items.len());
        assert!(!slides.is_empty());
    }

    #[test]
    fn slide_change_moves_the_thumbnail_marker() {
        let mut app = app();
        app.update(Message::Gallery(gallery::Message::NextSlide));
        assert_eq!(app.thumbnails.active_index(), Some(1));
    }

    #[tokio::test]
    async fn variant_pick_is_debounced_then_filters_thumbnails() {
        let mut app = app();
        let variant = app.variants[0].0;
        app.update(Message::VariantPicked(variant));
        assert!(
            app.gallery.current_variant().is_none(),
            "not applied before the debounce elapses"
        );

        app.update(Message::SelectorSyncElapsed);
        assert_eq!(app.gallery.current_variant(), Some(variant));
        assert!(app
            .thumbnails
            .items()
            .iter()
            .all(|item| item.visible == (item.variant_id == Some(variant))));
    }

    #[tokio::test]
    async fn show_all_unfilters_the_thumbnails() {
        let mut app = app();
        let variant = app.variants[0].0;
        app.update(Message::VariantPicked(variant));
        app.update(Message::SelectorSyncElapsed);

        app.update(Message::ShowAllPressed);
        assert!(app.gallery.current_variant().is_none());
        assert!(app.thumbnails.items().iter().all(|item| item.visible));
    }

    #[test]
    fn thumbnail_press_drives_the_gallery() {
        let mut app = app();
        app.update(Message::Thumbnails(thumbnails::Message::Pressed(2)));
        assert_eq!(app.gallery.current_index(), 2);
        assert_eq!(app.thumbnails.active_index(), Some(2));
        assert!(app.status.contains("variant image clicked"));
    }
}
