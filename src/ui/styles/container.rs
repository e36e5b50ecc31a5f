// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Gradient, Radians, Theme};
use std::f32::consts::FRAC_PI_2;

fn black(alpha: f32) -> Color {
    Color { a: alpha, ..BLACK }
}

fn white(alpha: f32) -> Color {
    Color { a: alpha, ..WHITE }
}

/// Window background.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STONE_950)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Opaque layer covering the window during a detail transition.
pub fn mask(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STONE_950)),
        ..Default::default()
    }
}

/// Rounded frame around the slider artwork.
pub fn frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STONE_900)),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Left-to-right darkening so the info panel stays readable.
pub fn scrim_horizontal(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Radians(FRAC_PI_2))
        .add_stop(0.0, black(0.8))
        .add_stop(0.5, black(0.3))
        .add_stop(1.0, black(0.6));

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        ..Default::default()
    }
}

/// Bottom-to-top darkening.
pub fn scrim_vertical(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Radians(0.0))
        .add_stop(0.0, black(0.6))
        .add_stop(0.5, Color::TRANSPARENT)
        .add_stop(1.0, black(0.2));

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        ..Default::default()
    }
}

/// Fade from the detail image into the info column.
pub fn detail_scrim(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Radians(FRAC_PI_2))
        .add_stop(0.0, Color::TRANSPARENT)
        .add_stop(0.5, Color::TRANSPARENT)
        .add_stop(1.0, Color { a: 0.5, ..palette::STONE_950 });

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        ..Default::default()
    }
}

/// Pill badge with the artwork style on the slider, faded by `alpha`.
pub fn badge(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(white(opacity::SURFACE_SUBTLE * alpha))),
        text_color: Some(white(0.7 * alpha)),
        border: Border {
            color: white(opacity::SURFACE_SUBTLE * alpha),
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Amber-tinted pill badge on the detail view, faded by `alpha`.
pub fn accent_badge(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: 0.3 * alpha,
            ..palette::AMBER_600
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// One-pixel separator above the detail rows.
pub fn divider(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(white(opacity::SURFACE_SUBTLE * alpha))),
        ..Default::default()
    }
}

/// Background of an image that is loading or failed to load.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STONE_900)),
        text_color: Some(palette::STONE_400),
        ..Default::default()
    }
}

/// Detail info column.
pub fn info_column(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STONE_950)),
        ..Default::default()
    }
}
