// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn white(alpha: f32) -> Color {
    Color { a: alpha, ..WHITE }
}

/// Text-only button ("View Details", "Back to Gallery").
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::AMBER_200,
        button::Status::Disabled => white(opacity::TEXT_FAINT),
        button::Status::Active => white(0.5),
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Round translucent button for the navigation arrows.
pub fn round(_theme: &Theme, status: button::Status) -> button::Style {
    let (fill, edge, text) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (0.15, opacity::TEXT_FAINT, opacity::OPAQUE)
        }
        button::Status::Disabled => (0.05, opacity::SURFACE_SUBTLE, opacity::TEXT_FAINT),
        button::Status::Active => (0.05, opacity::SURFACE_SUBTLE, 0.7),
    };

    button::Style {
        background: Some(Background::Color(white(fill))),
        text_color: white(text),
        border: Border {
            color: white(edge),
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Close button on the detail view: bare glyph that brightens on hover.
pub fn close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OPAQUE,
        _ => 0.5,
    };

    button::Style {
        background: None,
        text_color: white(alpha),
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Vertical slide indicator bar.
///
/// Inactive bars brighten on hover; the active one stays opaque.
pub fn indicator(alpha: f32, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered if !active => opacity::TEXT_DIM,
            _ => alpha,
        };

        button::Style {
            background: Some(Background::Color(white(alpha))),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Outlined amber button used to retry a failed image.
pub fn retry(_theme: &Theme, status: button::Status) -> button::Style {
    let (fill, text) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Color { a: 0.2, ..palette::AMBER_500 }, palette::AMBER_200)
        }
        _ => (Color::TRANSPARENT, palette::AMBER_400),
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: text,
        border: Border {
            color: palette::AMBER_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_hover_turns_amber() {
        let style = ghost(&Theme::Dark, button::Status::Hovered);
        assert_eq!(style.text_color, palette::AMBER_200);
        assert!(style.background.is_none());
    }

    #[test]
    fn disabled_round_button_is_dimmed() {
        let active = round(&Theme::Dark, button::Status::Active);
        let disabled = round(&Theme::Dark, button::Status::Disabled);
        assert!(disabled.text_color.a < active.text_color.a);
    }

    #[test]
    fn active_indicator_ignores_hover() {
        let style = indicator(1.0, true)(&Theme::Dark, button::Status::Hovered);
        assert_eq!(style.background, Some(Background::Color(WHITE)));

        let idle = indicator(opacity::INDICATOR_IDLE, false)(&Theme::Dark, button::Status::Hovered);
        assert_eq!(idle.background, Some(Background::Color(white(opacity::TEXT_DIM))));
    }
}
