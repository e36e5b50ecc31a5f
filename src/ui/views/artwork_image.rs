// SPDX-License-Identifier: MPL-2.0
//! Artwork image tile: spinner while loading, placeholder with retry on
//! failure, cover-fitted image once ready.

use super::Message;
use crate::catalog::ArtworkRecord;
use crate::media::ImageStatus;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, center, column, container, image, text};
use iced::{alignment::Horizontal, ContentFit, Element, Length};
use std::time::Duration;

/// Renders the tile for `record`. A missing status counts as loading.
pub fn view<'a>(
    record: &'a ArtworkRecord,
    status: Option<&'a ImageStatus>,
    clock: Duration,
) -> Element<'a, Message> {
    match status {
        Some(ImageStatus::Ready(data)) => image(data.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(ImageStatus::Failed(error)) => failed(record, error.placeholder_text()),
        Some(ImageStatus::Loading) | None => loading(clock),
    }
}

fn loading<'a>(clock: Duration) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::AMBER_400)
        .at(clock)
        .into_element();

    container(center(spinner))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::placeholder)
        .into()
}

fn failed<'a>(record: &'a ArtworkRecord, reason: &'static str) -> Element<'a, Message> {
    let content = column![
        text(&record.title).size(typography::BODY_LG),
        text(reason).size(typography::CAPTION).color(palette::ERROR_400),
        button(text("Retry").size(typography::CAPTION))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::retry)
            .on_press(Message::RetryImage(record.id)),
    ]
    .spacing(spacing::SM)
    .align_x(Horizontal::Center);

    container(center(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::placeholder)
        .into()
}
