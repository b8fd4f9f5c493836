// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Key presses are forwarded to the gallery whatever the modal state; the
//! router decides whether they do anything.

use super::Message;
use crate::gallery::{self, Key};
use iced::keyboard::{self, key::Named};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Maps a native key to the keys the gallery router understands.
#[must_use]
pub fn gallery_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Named(Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(Named::ArrowRight) => Key::ArrowRight,
        _ => Key::Other,
    }
}

/// Routes key presses not captured by a focused widget to the gallery.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event else {
            return None;
        };
        match (status, gallery_key(key)) {
            (event::Status::Captured, _) | (_, Key::Other) => None,
            (event::Status::Ignored, key) => Some(Message::Gallery(gallery::Message::Key(key))),
        }
    })
}

/// Periodic tick driving notification auto-dismiss, only while toasts exist.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
