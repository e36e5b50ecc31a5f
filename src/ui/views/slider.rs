// SPDX-License-Identifier: MPL-2.0
//! Slider view: one artwork at a time with its info panel, vertical
//! navigation and a position footer.

use super::{artwork_image, Message, LIGHT};
use crate::catalog::ArtworkRecord;
use crate::gallery::{self, PresentationHints};
use crate::media::ImageStatus;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::presentation::{self, fade, SlideStyle};
use crate::ui::styles;
use crate::ui::widgets::{Glyph, GlyphKind};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, center, column, container, row, text, Column, Space, Stack};
use iced::{Color, Element, Length, Padding, Theme};
use std::time::Duration;

const HEADER: &str = "OUR ARTWORK COLLECTION";
const COPYRIGHT: &str = "© 2026 GALLERY COLLECTION";

pub struct ViewContext<'a> {
    pub record: &'a ArtworkRecord,
    pub image: Option<&'a ImageStatus>,
    pub index: usize,
    pub len: usize,
    pub hints: PresentationHints,
    pub clock: Duration,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = container(
        text(HEADER)
            .size(typography::TITLE_SM)
            .font(LIGHT)
            .color(palette::STONE_400),
    )
    .center_x(Length::Fill);

    let content = row![
        info_panel(ctx.record, presentation::info_panel(ctx.hints)),
        navigation(ctx.index, ctx.len, ctx.hints.is_animating),
    ]
    .height(Length::Fill);

    let stage = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(artwork_image::view(ctx.record, ctx.image, ctx.clock))
        .push(scrim(styles::container::scrim_horizontal))
        .push(scrim(styles::container::scrim_vertical))
        .push(content);

    let main = container(stage)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(styles::container::frame);

    let footer = row![
        text(presentation::position_label(ctx.index, ctx.len)),
        Space::new().width(Length::Fill),
        text(COPYRIGHT),
    ]
    .align_y(Vertical::Center);
    let footer = container(footer).style(|_theme: &Theme| container::Style {
        text_color: Some(palette::STONE_600),
        ..Default::default()
    });

    column![header, main, footer.width(Length::Fill)]
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .into()
}

fn scrim<'a>(style: fn(&Theme) -> container::Style) -> Element<'a, Message> {
    container(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style)
        .into()
}

fn white(alpha: f32) -> Color {
    Color {
        a: alpha,
        ..palette::WHITE
    }
}

fn info_panel(record: &ArtworkRecord, style: SlideStyle) -> Element<'_, Message> {
    let alpha = style.alpha;

    let badge = row![
        container(text(record.style.to_uppercase()).size(typography::MICRO))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::badge(alpha)),
        text("•")
            .size(typography::CAPTION)
            .color(fade(white(opacity::TEXT_DIM), alpha)),
        text(&record.year)
            .size(typography::CAPTION)
            .color(fade(white(0.5), alpha)),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center);

    let title = text(&record.title)
        .size(typography::TITLE_LG)
        .font(LIGHT)
        .color(fade(palette::WHITE, alpha));

    let artist = text(format!("by {}", record.artist))
        .size(typography::TITLE_SM)
        .font(LIGHT)
        .color(fade(
            Color {
                a: opacity::TEXT_STRONG,
                ..palette::AMBER_200
            },
            alpha,
        ));

    let description = text(&record.description)
        .size(typography::BODY)
        .font(LIGHT)
        .color(fade(white(opacity::TEXT_MUTED), alpha));

    let facts = column![
        row![
            fact("MEDIUM", &record.medium, alpha),
            fact("DIMENSIONS", &record.dimensions, alpha),
        ]
        .spacing(spacing::MD),
        fact("COLLECTION", &record.collection, alpha),
    ]
    .spacing(spacing::MD);

    let open = button(
        row![
            text("VIEW DETAILS").size(typography::CAPTION),
            Glyph::new(GlyphKind::ChevronRight, fade(white(0.5), alpha), sizing::ICON_XS)
                .into_element(),
        ]
        .spacing(spacing::XS)
        .align_y(Vertical::Center),
    )
    .padding(0)
    .style(styles::button::ghost)
    .on_press(gallery::Message::OpenDetails.into());

    let panel = column![
        badge,
        Space::new().height(spacing::XS),
        title,
        artist,
        Space::new().height(spacing::XS),
        description,
        Space::new().height(spacing::XS),
        facts,
        Space::new().height(spacing::XS),
        open,
    ]
    .spacing(spacing::SM)
    .max_width(sizing::INFO_PANEL_WIDTH);

    // The panel keeps a fixed footprint; the offset only redistributes padding.
    let inset = spacing::XXXL + sizing::SLIDE_OFFSET;
    container(panel)
        .padding(Padding {
            top: spacing::XXXL,
            bottom: spacing::XXXL,
            left: inset + style.offset,
            right: inset - style.offset,
        })
        .width(Length::FillPortion(2))
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .into()
}

fn fact<'a>(label: &'static str, value: &'a str, alpha: f32) -> Element<'a, Message> {
    column![
        text(label)
            .size(typography::MICRO)
            .color(fade(white(opacity::TEXT_FAINT), alpha)),
        text(value)
            .size(typography::BODY)
            .font(LIGHT)
            .color(fade(white(opacity::TEXT_STRONG), alpha)),
    ]
    .spacing(spacing::XXS)
    .width(Length::Fill)
    .into()
}

fn navigation<'a>(current: usize, len: usize, locked: bool) -> Element<'a, Message> {
    let arrow = |kind: GlyphKind, message: gallery::Message| {
        button(center(
            Glyph::new(kind, white(0.7), sizing::ICON_NAV).into_element(),
        ))
        .width(Length::Fixed(sizing::ROUND_BUTTON))
        .height(Length::Fixed(sizing::ROUND_BUTTON))
        .padding(0)
        .style(styles::button::round)
        .on_press_maybe((!locked).then_some(message.into()))
    };

    let bars = presentation::indicators(len, current).into_iter().map(|bar| {
        button(
            Space::new()
                .width(Length::Fixed(sizing::INDICATOR_WIDTH))
                .height(Length::Fixed(bar.height)),
        )
        .padding(0)
        .style(styles::button::indicator(bar.alpha, bar.active))
        .on_press_maybe(
            (!locked && !bar.active).then_some(gallery::Message::JumpTo(bar.index).into()),
        )
        .into()
    });

    let column = column![
        arrow(GlyphKind::ChevronUp, gallery::Message::Retreat),
        Column::with_children(bars)
            .spacing(spacing::XS)
            .align_x(Horizontal::Center),
        arrow(GlyphKind::ChevronDown, gallery::Message::Advance),
    ]
    .spacing(spacing::LG)
    .align_x(Horizontal::Center);

    container(column)
        .padding(Padding {
            right: spacing::XXXL,
            ..Padding::ZERO
        })
        .width(Length::FillPortion(3))
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center)
        .into()
}
