// SPDX-License-Identifier: MPL-2.0
//! Iced rendering for the gallery.
//!
//! The strip shows the window of `slides_per_view` slides starting at the
//! current index; widths and spacing come from the layout engine so the
//! rendered strip matches the component's cached transform. Disabled
//! navigation buttons keep their press handler — the boundary no-op lives
//! in the index controller, the dimmed style only communicates it.

use super::{Gallery, Message};
use iced::widget::{button, image, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

const SLIDE_HEIGHT: f32 = 360.0;
const BULLET_SIZE: f32 = 18.0;
const DISABLED_ALPHA: f32 = 0.35;

pub fn view(gallery: &Gallery) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(12)
        .align_x(alignment::Horizontal::Center)
        .push(strip(gallery));

    if gallery.nav_buttons().visible {
        content = content.push(nav_row(gallery));
    }
    if gallery.pagination().visible {
        content = content.push(bullet_row(gallery));
    }

    Container::new(content)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// The visible window of slides.
fn strip(gallery: &Gallery) -> Element<'_, Message> {
    let params = gallery.params();
    let slide_width = params.slide_width_px(gallery.viewport_width());
    let first = gallery.current_index();
    let last = (first + params.slides_per_view as usize).min(gallery.slides().len());

    let mut row = Row::new().spacing(params.space_between);
    for slide in &gallery.slides().active()[first..last] {
        if !slide.visible {
            // Hidden during a staggered reveal; keep the cell's footprint.
            row = row.push(
                Space::new()
                    .width(Length::Fixed(slide_width))
                    .height(Length::Fixed(SLIDE_HEIGHT)),
            );
            continue;
        }
        row = row.push(slide_cell(slide, slide_width));
    }
    row.into()
}

fn slide_cell(slide: &super::slides::Slide, width: f32) -> Element<'_, Message> {
    // Remote URLs render as a captioned placeholder; the demo ships local
    // image paths which load directly.
    let media: Element<'_, Message> = if slide.image_url.starts_with("http") {
        Column::new()
            .spacing(6)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(slide.alt.as_str()).size(16))
            .push(Text::new(slide.image_url.as_str()).size(11))
            .into()
    } else {
        image(image::Handle::from_path(&slide.image_url))
            .width(Length::Fill)
            .into()
    };

    Container::new(media)
        .width(Length::Fixed(width))
        .height(Length::Fixed(SLIDE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn nav_row(gallery: &Gallery) -> Element<'_, Message> {
    let nav = gallery.nav_buttons();
    let prev = button(Text::new("‹").size(22))
        .padding([6, 14])
        .style(nav_button_style(nav.prev_disabled))
        .on_press(Message::PreviousSlide);
    let next = button(Text::new("›").size(22))
        .padding([6, 14])
        .style(nav_button_style(nav.next_disabled))
        .on_press(Message::NextSlide);

    Row::new()
        .spacing(16)
        .align_y(alignment::Vertical::Center)
        .push(prev)
        .push(next)
        .into()
}

fn bullet_row(gallery: &Gallery) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(8)
        .align_y(alignment::Vertical::Center);
    for bullet in &gallery.pagination().bullets {
        let label = if bullet.active { "●" } else { "○" };
        row = row.push(
            button(Text::new(label).size(BULLET_SIZE))
                .padding(2)
                .style(button::text)
                .on_press(Message::BulletPressed(bullet.page)),
        );
    }
    row.into()
}

fn nav_button_style(disabled: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let base = button::secondary(theme, status);
        if disabled {
            button::Style {
                text_color: Color {
                    a: DISABLED_ALPHA,
                    ..base.text_color
                },
                ..base
            }
        } else {
            base
        }
    }
}
