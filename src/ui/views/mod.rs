// SPDX-License-Identifier: MPL-2.0
//! Gallery screens.
//!
//! The slider and the detail view are mutually exclusive and selected by
//! `show_details`. While a detail transition runs, an opaque mask covers
//! both and swallows pointer input.

pub mod artwork_image;
pub mod detail;
pub mod slider;

use crate::catalog::{ArtworkId, Catalog};
use crate::gallery;
use crate::media::ImageStore;
use crate::ui::presentation;
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{container, opaque, Space, Stack};
use iced::{Element, Font, Length};
use std::time::Duration;

/// Light weight used for titles and body copy.
pub(crate) const LIGHT: Font = Font {
    weight: Weight::Light,
    ..Font::DEFAULT
};

/// Messages emitted by the gallery screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Gallery(gallery::Message),
    RetryImage(ArtworkId),
}

impl From<gallery::Message> for Message {
    fn from(message: gallery::Message) -> Self {
        Message::Gallery(message)
    }
}

/// Everything the screens read to render one frame.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub gallery: &'a gallery::State,
    pub images: &'a ImageStore,
    /// Time since the detail view appeared, `None` on the slider.
    pub reveal_elapsed: Option<Duration>,
    /// Monotonic app clock, drives the loading spinner.
    pub clock: Duration,
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let index = ctx.gallery.current_index();
    let record = ctx.catalog.at(index);
    let image = ctx.images.status(record.id);
    let hints = ctx.gallery.hints();

    let screen = if ctx.gallery.show_details() {
        detail::view(detail::ViewContext {
            record,
            image,
            reveal_elapsed: ctx.reveal_elapsed.unwrap_or_default(),
            clock: ctx.clock,
        })
    } else {
        slider::view(slider::ViewContext {
            record,
            image,
            index,
            len: ctx.catalog.len().get(),
            hints,
            clock: ctx.clock,
        })
    };

    let base = container(screen)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if presentation::mask_visible(hints) {
        layers = layers.push(opaque(
            container(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::mask),
        ));
    }

    layers.into()
}
