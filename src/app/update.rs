// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The gallery state machine decides; these handlers carry out what it asks
//! for (timers, image fetches) and keep the diagnostics log.

use super::timers::TimerHandles;
use super::{shortcuts, Message};
use crate::catalog::{ArtworkId, ArtworkRecord, Catalog};
use crate::diagnostics::{DiagnosticEventKind, Diagnostics};
use crate::error::{describe_artwork, ImageError};
use crate::gallery::{self, Effect, Slot};
use crate::media::{load_artwork_image, neighborhood, FetchOptions, ImageData, ImageStore};
use iced::keyboard::{Key, Modifiers};
use iced::{window, Task};
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub catalog: &'a Catalog,
    pub gallery: &'a mut gallery::State,
    pub images: &'a mut ImageStore,
    pub timers: &'a mut TimerHandles,
    pub diagnostics: &'a mut Diagnostics,
    pub now: &'a mut Instant,
    pub reveal_started: &'a mut Option<Instant>,
    pub fetch_options: FetchOptions,
    pub prefetch_radius: usize,
}

/// Feeds one message to the state machine and performs the resulting effect.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let before = ctx.gallery.authoritative();
    let effect = ctx.gallery.handle(message);
    let after = ctx.gallery.authoritative();

    let mut tasks = Vec::new();
    match effect {
        Effect::None => {}
        Effect::Dropped(action) => {
            ctx.diagnostics
                .record(DiagnosticEventKind::InputDropped { action });
        }
        Effect::Schedule(deferred) => {
            if matches!(
                message,
                gallery::Message::OpenDetails | gallery::Message::CloseDetails
            ) {
                ctx.diagnostics
                    .record(DiagnosticEventKind::DetailTransitionStarted {
                        opening: message == gallery::Message::OpenDetails,
                    });
            }
            tasks.push(ctx.timers.schedule(deferred));
        }
        Effect::Settled(slot) => {
            ctx.timers.settle(slot);
            let kind = match slot {
                Slot::NavigationLock => DiagnosticEventKind::NavigationSettled {
                    index: after.current_index,
                },
                Slot::DetailTransition => DiagnosticEventKind::DetailTransitionSettled {
                    showing: after.show_details,
                },
            };
            ctx.diagnostics.record(kind);
        }
    }

    if after.current_index != before.current_index {
        ctx.diagnostics
            .record(DiagnosticEventKind::NavigationStarted {
                from: before.current_index,
                to: after.current_index,
                direction: ctx.gallery.direction(),
            });
        tasks.push(request_images(ctx));
    }

    if after.show_details != before.show_details {
        ctx.diagnostics
            .record(DiagnosticEventKind::DetailViewSwapped {
                showing: after.show_details,
            });
        if after.show_details {
            let now = Instant::now();
            *ctx.now = now;
            *ctx.reveal_started = Some(now);
        } else {
            *ctx.reveal_started = None;
        }
    }

    Task::batch(tasks)
}

/// Maps a key press to the gallery, if it is a shortcut in the current view.
pub fn handle_key_pressed(
    ctx: &mut UpdateContext<'_>,
    key: &Key,
    modifiers: Modifiers,
) -> Task<Message> {
    match shortcuts::gallery_message(
        key,
        modifiers,
        ctx.gallery.show_details(),
        ctx.gallery.is_transitioning(),
    ) {
        Some(message) => handle_gallery_message(ctx, message),
        None => Task::none(),
    }
}

/// Starts fetches for the current artwork and its neighbours.
pub fn request_images(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let order = neighborhood(
        ctx.gallery.current_index(),
        ctx.catalog.len().get(),
        ctx.prefetch_radius,
    );

    let mut tasks = Vec::new();
    for index in order {
        let Some(record) = ctx.catalog.get(index) else {
            continue;
        };
        if ctx.images.begin(record.id) {
            ctx.diagnostics
                .record(DiagnosticEventKind::ImageRequested { id: record.id });
            tasks.push(load_task(record, ctx.fetch_options));
        }
    }
    Task::batch(tasks)
}

fn load_task(record: &ArtworkRecord, options: FetchOptions) -> Task<Message> {
    let id = record.id;
    let uri = record.image.clone();
    Task::perform(load_artwork_image(uri, options), move |result| {
        Message::ImageLoaded { id, result }
    })
}

/// Stores a finished fetch.
pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    id: ArtworkId,
    result: Result<ImageData, ImageError>,
) -> Task<Message> {
    // Late results for ids no longer in the catalog are dropped.
    if ctx.catalog.position(id).is_none() {
        return Task::none();
    }

    let kind = match &result {
        Ok(data) => DiagnosticEventKind::ImageLoaded {
            id,
            width: data.width,
            height: data.height,
        },
        Err(err) => DiagnosticEventKind::ImageFailed {
            id,
            reason: describe_artwork(id, err),
        },
    };
    if ctx.images.finish(id, result) {
        ctx.diagnostics.record(kind);
    }
    Task::none()
}

/// Drops a failed image and fetches it again.
pub fn handle_retry(ctx: &mut UpdateContext<'_>, id: ArtworkId) -> Task<Message> {
    let Some(record) = ctx
        .catalog
        .position(id)
        .and_then(|index| ctx.catalog.get(index))
    else {
        return Task::none();
    };

    ctx.images.forget(id);
    if ctx.images.begin(id) {
        ctx.diagnostics
            .record(DiagnosticEventKind::ImageRequested { id });
        load_task(record, ctx.fetch_options)
    } else {
        Task::none()
    }
}

/// Advances the animation clock.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, instant: Instant) -> Task<Message> {
    *ctx.now = instant;
    Task::none()
}

/// Tears the gallery down, aborts every pending timer, then closes the window.
pub fn handle_close_request(ctx: &mut UpdateContext<'_>, window_id: window::Id) -> Task<Message> {
    let cancelled = ctx.gallery.teardown();
    ctx.timers.cancel_all();
    ctx.diagnostics
        .record(DiagnosticEventKind::TornDown { cancelled });
    window::close(window_id)
}
