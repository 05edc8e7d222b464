// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Left/Right arrow keys drive the gallery carousel. The update loop guards
//! against galleries that cannot be navigated, so the routing here stays
//! unconditional.

use super::Message;
use crate::ui::viewer;
use iced::{event, keyboard, Subscription};

/// Routes native keyboard events to carousel navigation messages.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
            ..
        }) => Some(Message::Viewer(viewer::Message::Next)),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
            ..
        }) => Some(Message::Viewer(viewer::Message::Previous)),
        _ => None,
    })
}
