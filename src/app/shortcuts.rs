// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts.
//!
//! | Key                          | View    | Action              |
//! |------------------------------|---------|---------------------|
//! | ArrowDown / ArrowRight       | slider  | next artwork        |
//! | ArrowUp / ArrowLeft          | slider  | previous artwork    |
//! | 1 ... 9                      | slider  | jump to artwork n   |
//! | Enter / Space                | slider  | open details        |
//! | Escape / Backspace           | detail  | back to the slider  |
//!
//! Nothing is mapped while a detail transition runs or when Ctrl, Alt or
//! Logo is held.

use crate::gallery;
use iced::keyboard::{self, key::Named, Key, Modifiers};

/// Maps a key press to a gallery message for the current view.
#[must_use]
pub fn gallery_message(
    key: &Key,
    modifiers: Modifiers,
    showing_details: bool,
    transitioning: bool,
) -> Option<gallery::Message> {
    if transitioning || modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    if showing_details {
        return match key {
            Key::Named(Named::Escape | Named::Backspace) => Some(gallery::Message::CloseDetails),
            _ => None,
        };
    }

    match key {
        Key::Named(Named::ArrowDown | Named::ArrowRight) => Some(gallery::Message::Advance),
        Key::Named(Named::ArrowUp | Named::ArrowLeft) => Some(gallery::Message::Retreat),
        Key::Named(Named::Enter | Named::Space) => Some(gallery::Message::OpenDetails),
        Key::Character(c) => digit_target(c.as_str()).map(gallery::Message::JumpTo),
        _ => None,
    }
}

/// Zero-based index for the digits `1` to `9`.
fn digit_target(text: &str) -> Option<usize> {
    let mut chars = text.chars();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() || digit == 0 {
        return None;
    }
    Some(digit as usize - 1)
}

/// Extracts the key and modifiers of a key press.
#[must_use]
pub fn key_press(event: &keyboard::Event) -> Option<(Key, Modifiers)> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Some((key.clone(), *modifiers)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(key: Key) -> Option<gallery::Message> {
        gallery_message(&key, Modifiers::empty(), false, false)
    }

    fn detail(key: Key) -> Option<gallery::Message> {
        gallery_message(&key, Modifiers::empty(), true, false)
    }

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn arrows_navigate_in_slider() {
        assert_eq!(
            slider(Key::Named(Named::ArrowDown)),
            Some(gallery::Message::Advance)
        );
        assert_eq!(
            slider(Key::Named(Named::ArrowRight)),
            Some(gallery::Message::Advance)
        );
        assert_eq!(
            slider(Key::Named(Named::ArrowUp)),
            Some(gallery::Message::Retreat)
        );
        assert_eq!(
            slider(Key::Named(Named::ArrowLeft)),
            Some(gallery::Message::Retreat)
        );
    }

    #[test]
    fn digits_jump_to_one_based_position() {
        assert_eq!(slider(character("1")), Some(gallery::Message::JumpTo(0)));
        assert_eq!(slider(character("9")), Some(gallery::Message::JumpTo(8)));
        assert_eq!(slider(character("0")), None);
        assert_eq!(slider(character("a")), None);
        assert_eq!(slider(character("12")), None);
    }

    #[test]
    fn enter_and_space_open_details() {
        assert_eq!(
            slider(Key::Named(Named::Enter)),
            Some(gallery::Message::OpenDetails)
        );
        assert_eq!(
            slider(Key::Named(Named::Space)),
            Some(gallery::Message::OpenDetails)
        );
        assert_eq!(slider(Key::Named(Named::Escape)), None);
    }

    #[test]
    fn detail_view_only_closes() {
        assert_eq!(
            detail(Key::Named(Named::Escape)),
            Some(gallery::Message::CloseDetails)
        );
        assert_eq!(
            detail(Key::Named(Named::Backspace)),
            Some(gallery::Message::CloseDetails)
        );
        assert_eq!(detail(Key::Named(Named::ArrowRight)), None);
        assert_eq!(detail(character("2")), None);
    }

    #[test]
    fn transitions_and_modifiers_suppress_shortcuts() {
        let key = Key::Named(Named::ArrowRight);
        assert_eq!(gallery_message(&key, Modifiers::empty(), false, true), None);
        assert_eq!(gallery_message(&key, Modifiers::CTRL, false, false), None);
        assert_eq!(gallery_message(&key, Modifiers::ALT, false, false), None);
        assert_eq!(
            gallery_message(&key, Modifiers::SHIFT, false, false),
            Some(gallery::Message::Advance)
        );
    }
}
