// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Hands the gallery state to the screens and lifts their messages into
//! top-level [`Message`]s.

use super::Message;
use crate::catalog::Catalog;
use crate::gallery;
use crate::media::ImageStore;
use crate::ui::views;
use iced::Element;
use std::time::Duration;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub gallery: &'a gallery::State,
    pub images: &'a ImageStore,
    pub reveal_elapsed: Option<Duration>,
    pub clock: Duration,
}

/// Renders the slider or the detail view, whichever is showing.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    views::view(views::ViewContext {
        catalog: ctx.catalog,
        gallery: ctx.gallery,
        images: ctx.images,
        reveal_elapsed: ctx.reveal_elapsed,
        clock: ctx.clock,
    })
    .map(Message::View)
}
