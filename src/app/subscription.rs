// SPDX-License-Identifier: MPL-2.0
//! Native event routing for the demo shell.
//!
//! Keyboard arrows and window resizes map straight onto gallery messages;
//! mouse events are forwarded raw so the shell can track the cursor for the
//! drag gesture.

use super::Message;
use crate::gallery;
use iced::{event, keyboard, window, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route)
}

fn route(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match &event {
        Event::Window(window::Event::Resized(size)) => {
            Some(Message::Gallery(gallery::Message::Resized(size.width)))
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
            ..
        }) if status == event::Status::Ignored => {
            Some(Message::Gallery(gallery::Message::PreviousSlide))
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
            ..
        }) if status == event::Status::Ignored => {
            Some(Message::Gallery(gallery::Message::NextSlide))
        }
        Event::Mouse(_) => Some(Message::RawEvent(event.clone())),
        _ => None,
    }
}
