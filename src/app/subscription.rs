// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window and keyboard events to app messages. Gallery
//! shortcuts are only active while the overlay is open.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval of the notification tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Window events: close requests and resizes, plus gallery shortcuts.
pub fn create_event_subscription(gallery_open: bool) -> Subscription<Message> {
    if gallery_open {
        event::listen_with(|event, status, window_id| {
            route_window_event(&event, window_id).or_else(|| match (status, &event) {
                (event::Status::Ignored, event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. })) => {
                    gallery_shortcut(key).map(Message::Gallery)
                }
                _ => None,
            })
        })
    } else {
        event::listen_with(|event, _status, window_id| route_window_event(&event, window_id))
    }
}

fn route_window_event(event: &event::Event, window_id: iced::window::Id) -> Option<Message> {
    match event {
        event::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(*size))
        }
        _ => None,
    }
}

/// Maps a key to a gallery action: Escape closes, arrows page.
#[must_use]
pub fn gallery_shortcut(key: &Key) -> Option<gallery::Message> {
    match key {
        Key::Named(Named::Escape) => Some(gallery::Message::Close),
        Key::Named(Named::ArrowRight) => Some(gallery::Message::Next),
        Key::Named(Named::ArrowLeft) => Some(gallery::Message::Previous),
        _ => None,
    }
}

/// Periodic tick for notification auto-dismiss, only while toasts exist.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_gallery() {
        assert_eq!(
            gallery_shortcut(&Key::Named(Named::Escape)),
            Some(gallery::Message::Close)
        );
    }

    #[test]
    fn arrows_page_through_gallery() {
        assert_eq!(
            gallery_shortcut(&Key::Named(Named::ArrowRight)),
            Some(gallery::Message::Next)
        );
        assert_eq!(
            gallery_shortcut(&Key::Named(Named::ArrowLeft)),
            Some(gallery::Message::Previous)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(gallery_shortcut(&Key::Character("a".into())), None);
        assert_eq!(gallery_shortcut(&Key::Named(Named::Enter)), None);
    }
}
