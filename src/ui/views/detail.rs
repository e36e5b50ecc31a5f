// SPDX-License-Identifier: MPL-2.0
//! Detail view: large artwork on the left, full record on the right.
//!
//! Text blocks fade and slide up one after another once the view appears.

use super::{artwork_image, Message, LIGHT};
use crate::catalog::ArtworkRecord;
use crate::config::REVEAL_TRAVEL_PX;
use crate::gallery;
use crate::media::ImageStatus;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::presentation::{fade, reveal, Reveal, RevealStep};
use crate::ui::styles;
use crate::ui::widgets::{Glyph, GlyphKind};
use iced::alignment::Vertical;
use iced::widget::{button, column, container, row, text, Space, Stack};
use iced::{Color, Element, Length, Padding};
use std::time::Duration;

pub struct ViewContext<'a> {
    pub record: &'a ArtworkRecord,
    pub image: Option<&'a ImageStatus>,
    pub reveal_elapsed: Duration,
    pub clock: Duration,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let picture = Stack::new()
        .width(Length::FillPortion(3))
        .height(Length::Fill)
        .push(artwork_image::view(ctx.record, ctx.image, ctx.clock))
        .push(
            container(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::detail_scrim),
        );

    let info = container(info_column(ctx.record, ctx.reveal_elapsed))
        .width(Length::FillPortion(2))
        .height(Length::Fill)
        .padding([spacing::XXL, spacing::XXXL])
        .align_y(Vertical::Center)
        .style(styles::container::info_column);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(row![picture, info])
        .push(top_bar())
        .into()
}

fn white(alpha: f32) -> Color {
    Color {
        a: alpha,
        ..palette::WHITE
    }
}

fn top_bar<'a>() -> Element<'a, Message> {
    let back = button(
        row![
            Glyph::new(GlyphKind::ArrowLeft, white(0.5), sizing::ICON_NAV).into_element(),
            text("BACK TO GALLERY").size(typography::CAPTION),
        ]
        .spacing(spacing::SM)
        .align_y(Vertical::Center),
    )
    .padding(spacing::XS)
    .style(styles::button::ghost)
    .on_press(gallery::Message::CloseDetails.into());

    let close = button(Glyph::new(GlyphKind::Close, white(0.5), sizing::ICON_MD).into_element())
        .padding(spacing::SM)
        .style(styles::button::close)
        .on_press(gallery::Message::CloseDetails.into());

    container(row![back, Space::new().width(Length::Fill), close].align_y(Vertical::Center))
        .width(Length::Fill)
        .padding(spacing::XL)
        .into()
}

/// Wraps a revealing block so it shifts within a fixed footprint.
fn revealed<'a>(content: impl Into<Element<'a, Message>>, state: Reveal) -> Element<'a, Message> {
    container(content)
        .padding(Padding {
            top: state.lift,
            bottom: REVEAL_TRAVEL_PX - state.lift,
            ..Padding::ZERO
        })
        .into()
}

fn info_column(record: &ArtworkRecord, elapsed: Duration) -> Element<'_, Message> {
    let at = |step| reveal(step, elapsed);

    let badge_state = at(RevealStep::Badge);
    let badge = container(
        text(record.style.to_uppercase())
            .size(typography::MICRO)
            .color(fade(
                Color {
                    a: opacity::TEXT_STRONG,
                    ..palette::AMBER_200
                },
                badge_state.alpha,
            )),
    )
    .padding([spacing::XXS + 2.0, spacing::SM])
    .style(styles::container::accent_badge(badge_state.alpha));

    let title_state = at(RevealStep::Title);
    let title = text(&record.title)
        .size(typography::DISPLAY)
        .font(LIGHT)
        .color(fade(palette::WHITE, title_state.alpha));

    let artist_state = at(RevealStep::Artist);
    let artist = text(format!("by {}", record.artist))
        .size(typography::TITLE_SM)
        .font(LIGHT)
        .color(fade(
            Color {
                a: 0.7,
                ..palette::AMBER_200
            },
            artist_state.alpha,
        ));

    let description_state = at(RevealStep::Description);
    let description = text(&record.description)
        .size(typography::BODY_LG)
        .color(fade(white(0.5), description_state.alpha));

    let details_state = at(RevealStep::Details);
    let details = column![
        container(Space::new().width(Length::Fill).height(Length::Fixed(1.0)))
            .style(styles::container::divider(details_state.alpha)),
        Space::new().height(spacing::LG),
        detail_row("YEAR", &record.year, details_state.alpha),
        detail_row("MEDIUM", &record.medium, details_state.alpha),
        detail_row("DIMENSIONS", &record.dimensions, details_state.alpha),
        detail_row("COLLECTION", &record.collection, details_state.alpha),
    ]
    .spacing(spacing::MD);

    column![
        revealed(badge, badge_state),
        revealed(title, title_state),
        revealed(artist, artist_state),
        revealed(description, description_state),
        revealed(details, details_state),
    ]
    .spacing(spacing::SM)
    .max_width(sizing::DETAIL_INFO_WIDTH)
    .into()
}

fn detail_row<'a>(label: &'static str, value: &'a str, alpha: f32) -> Element<'a, Message> {
    row![
        text(label)
            .size(typography::CAPTION)
            .width(Length::Fixed(sizing::DETAIL_LABEL_WIDTH))
            .color(fade(white(opacity::TEXT_FAINT), alpha)),
        container(
            text(value)
                .size(typography::BODY)
                .color(fade(white(0.7), alpha)),
        )
        .align_right(Length::Fill),
    ]
    .align_y(Vertical::Center)
    .into()
}
