// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are turned into top-level messages.
//! A frame tick runs only while something on screen animates on its own.

use super::{shortcuts, Message};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Roughly one frame at 60 Hz.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes key presses no widget captured, and window close requests.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        // Handle window close request for cleanup
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        match (&event, status) {
            (event::Event::Keyboard(keyboard_event), event::Status::Ignored) => {
                shortcuts::key_press(keyboard_event)
                    .map(|(key, modifiers)| Message::KeyPressed { key, modifiers })
            }
            _ => None,
        }
    })
}

/// Creates the frame tick used by the detail reveal and the loading spinner.
pub fn create_tick_subscription(is_revealing: bool, is_loading: bool) -> Subscription<Message> {
    if is_revealing || is_loading {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
