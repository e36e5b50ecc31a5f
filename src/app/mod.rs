// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery state
//! machine, the image store and the screens.
//!
//! The `App` struct owns the catalog and every runtime resource (timer
//! handles, image fetches, diagnostics). Policy such as the window size and
//! the catalog source precedence lives here next to the update loop.

mod message;
pub mod paths;
mod shortcuts;
mod subscription;
mod timers;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::config::{self, Config, MAX_IMAGE_BYTES};
use crate::diagnostics::{BufferCapacity, DiagnosticEventKind, Diagnostics};
use crate::error::Result;
use crate::gallery;
use crate::media::{FetchOptions, ImageStore};
use crate::ui::{presentation, views};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use timers::TimerHandles;

/// Suffix of the window title.
pub const APP_TITLE: &str = "Our Artwork Collection";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 650;
pub const MIN_WINDOW_HEIGHT: u32 = 650;

/// Root Iced application state.
pub struct App {
    catalog: Catalog,
    gallery: gallery::State,
    images: ImageStore,
    timers: TimerHandles,
    diagnostics: Diagnostics,
    fetch_options: FetchOptions,
    /// Neighbours fetched on each side of the current artwork.
    prefetch_radius: usize,
    started_at: Instant,
    /// Clock advanced by ticks; only read for animation.
    now: Instant,
    /// When the detail view last appeared.
    reveal_started: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_index", &self.gallery.current_index())
            .field("show_details", &self.gallery.show_details())
            .field("timers", &self.timers)
            .finish()
    }
}

/// Builds the window settings.
///
/// Closing is routed through the update loop so pending timers are cancelled
/// before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(app: App) -> iced::Result {
    use std::cell::RefCell;

    // Wrap the app in RefCell<Option<_>> to satisfy the Fn bound on boot
    // while only moving it out once.
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        app.boot()
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Reads the catalog file, or the built-in catalog when no path is given.
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => Catalog::load_from_path(path)?,
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}

impl App {
    /// Loads settings and the catalog for a normal start.
    ///
    /// The `--catalog` flag wins over `[catalog].path`; without either the
    /// built-in catalog is shown. A catalog that cannot be loaded is fatal,
    /// a broken settings file only produces a warning.
    pub fn from_flags(flags: Flags) -> Result<Self> {
        let (config, warning) = config::load_with_override(flags.config_dir.map(PathBuf::from));
        let catalog_path = flags.catalog.or_else(|| config.catalog.path.clone());
        let catalog = load_catalog(catalog_path.as_deref())?;

        let mut app = Self::with_catalog(catalog, &config, flags.start);
        if let Some(message) = warning {
            app.diagnostics
                .record(DiagnosticEventKind::ConfigWarning { message });
        }
        Ok(app)
    }

    /// Builds the app around an already loaded catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog, config: &Config, start: Option<usize>) -> Self {
        let gallery = gallery::State::with_start_index(
            catalog.len(),
            config.timings(),
            start.unwrap_or_default(),
        );
        let now = Instant::now();
        Self {
            catalog,
            gallery,
            images: ImageStore::new(config.image_cache_capacity()),
            timers: TimerHandles::new(),
            diagnostics: Diagnostics::new(BufferCapacity::new(config.diagnostics_capacity())),
            fetch_options: FetchOptions {
                timeout: config.request_timeout(),
                max_bytes: MAX_IMAGE_BYTES,
            },
            prefetch_radius: config.prefetch_neighbors(),
            started_at: now,
            now,
            reveal_started: None,
        }
    }

    /// Starts fetching the first artwork and its neighbours.
    pub fn boot(mut self) -> (Self, Task<Message>) {
        let task = update::request_images(&mut self.context());
        (self, task)
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            catalog: &self.catalog,
            gallery: &mut self.gallery,
            images: &mut self.images,
            timers: &mut self.timers,
            diagnostics: &mut self.diagnostics,
            now: &mut self.now,
            reveal_started: &mut self.reveal_started,
            fetch_options: self.fetch_options,
            prefetch_radius: self.prefetch_radius,
        }
    }

    /// Time since the detail view appeared, `None` on the slider.
    fn reveal_elapsed(&self) -> Option<Duration> {
        self.reveal_started
            .map(|started| self.now.saturating_duration_since(started))
    }

    fn is_revealing(&self) -> bool {
        self.reveal_elapsed()
            .is_some_and(|elapsed| elapsed < presentation::reveal_duration())
    }

    pub fn title(&self) -> String {
        let record = self.catalog.at(self.gallery.current_index());
        format!("{} - {APP_TITLE}", record.title)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.is_revealing(), self.images.has_loading());

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.context();

        match message {
            Message::View(views::Message::Gallery(gallery_message))
            | Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::View(views::Message::RetryImage(id)) => update::handle_retry(&mut ctx, id),
            Message::KeyPressed { key, modifiers } => {
                update::handle_key_pressed(&mut ctx, &key, modifiers)
            }
            Message::ImageLoaded { id, result } => {
                update::handle_image_loaded(&mut ctx, id, result)
            }
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
            Message::WindowCloseRequested(window_id) => {
                update::handle_close_request(&mut ctx, window_id)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            catalog: &self.catalog,
            gallery: &self.gallery,
            images: &self.images,
            reveal_elapsed: self.reveal_elapsed(),
            clock: self.now.saturating_duration_since(self.started_at),
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Number of timer tasks still alive.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use crate::catalog::{ArtworkId, CatalogError};
    use crate::error::{Error, ImageError};
    use crate::gallery::Action;
    use crate::media::{ImageData, ImageStatus};
    use iced::keyboard::{key::Named, Key, Modifiers};
    use tempfile::tempdir;

    fn app(count: u32) -> App {
        let (app, _task) = App::with_catalog(sample_catalog(count), &Config::default(), None).boot();
        app
    }

    fn press(app: &mut App, named: Named) {
        let _ = app.update(Message::KeyPressed {
            key: Key::Named(named),
            modifiers: Modifiers::empty(),
        });
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![255; 4])
    }

    fn requested(app: &App) -> usize {
        app.diagnostics()
            .events()
            .filter(|event| matches!(event.kind, DiagnosticEventKind::ImageRequested { .. }))
            .count()
    }

    #[test]
    fn boot_requests_current_artwork_and_neighbours() {
        let app = app(6);
        assert_eq!(requested(&app), 3);
        for id in [1, 2, 6] {
            assert!(matches!(
                app.images().status(ArtworkId::new(id)),
                Some(ImageStatus::Loading)
            ));
        }
        assert!(app.images().status(ArtworkId::new(3)).is_none());
    }

    #[test]
    fn start_index_is_clamped_to_catalog() {
        let app = App::with_catalog(sample_catalog(3), &Config::default(), Some(10));
        assert_eq!(app.gallery().current_index(), 2);
        assert_eq!(app.title(), format!("Title 3 - {APP_TITLE}"));
    }

    #[test]
    fn advance_moves_locks_and_prefetches() {
        let mut app = app(6);
        let _ = app.update(Message::Gallery(gallery::Message::Advance));

        assert_eq!(app.gallery().current_index(), 1);
        assert!(app.gallery().is_animating());
        assert_eq!(app.pending_timers(), 1);
        assert!(app.images().status(ArtworkId::new(3)).is_some());

        let _ = app.update(Message::Gallery(gallery::Message::Advance));
        assert_eq!(app.gallery().current_index(), 1);
        assert_eq!(
            app.diagnostics().last(),
            Some(&DiagnosticEventKind::InputDropped {
                action: Action::Advance
            })
        );
    }

    #[test]
    fn arrow_keys_drive_the_slider() {
        let mut app = app(6);
        press(&mut app, Named::ArrowUp);
        assert_eq!(app.gallery().current_index(), 5);
    }

    #[test]
    fn opening_details_blocks_keyboard_until_settled() {
        let mut app = app(6);
        let _ = app.update(Message::View(views::Message::Gallery(
            gallery::Message::OpenDetails,
        )));

        assert!(app.gallery().is_transitioning());
        assert!(!app.gallery().show_details());
        assert_eq!(
            app.diagnostics().last(),
            Some(&DiagnosticEventKind::DetailTransitionStarted { opening: true })
        );

        press(&mut app, Named::ArrowDown);
        assert_eq!(app.gallery().current_index(), 0);
    }

    #[test]
    fn image_results_update_the_store() {
        let mut app = app(6);
        let _ = app.update(Message::ImageLoaded {
            id: ArtworkId::new(1),
            result: Ok(pixel()),
        });
        let _ = app.update(Message::ImageLoaded {
            id: ArtworkId::new(2),
            result: Err(ImageError::HttpStatus(404)),
        });

        assert!(matches!(
            app.images().status(ArtworkId::new(1)),
            Some(ImageStatus::Ready(_))
        ));
        assert!(matches!(
            app.images().status(ArtworkId::new(2)),
            Some(ImageStatus::Failed(ImageError::HttpStatus(404)))
        ));
        assert!(matches!(
            app.diagnostics().last(),
            Some(DiagnosticEventKind::ImageFailed { .. })
        ));
    }

    #[test]
    fn retry_refetches_a_failed_image() {
        let mut app = app(6);
        let id = ArtworkId::new(2);
        let _ = app.update(Message::ImageLoaded {
            id,
            result: Err(ImageError::Network("reset".into())),
        });
        let before = requested(&app);

        let _ = app.update(Message::View(views::Message::RetryImage(id)));

        assert!(matches!(
            app.images().status(id),
            Some(ImageStatus::Loading)
        ));
        assert_eq!(requested(&app), before + 1);
    }

    #[test]
    fn small_cache_setting_keeps_current_image() {
        let mut config = Config::default();
        config.images.cache_capacity = Some(2);
        let (mut app, _task) = App::with_catalog(sample_catalog(6), &config, None).boot();

        for id in [1, 2, 6] {
            let _ = app.update(Message::ImageLoaded {
                id: ArtworkId::new(id),
                result: Ok(pixel()),
            });
        }

        assert!(matches!(
            app.images().status(ArtworkId::new(1)),
            Some(ImageStatus::Ready(_))
        ));
        assert!(!app.images().has_loading());
    }

    #[test]
    fn late_result_after_navigation_keeps_current_image() {
        let mut config = Config::default();
        config.images.cache_capacity = Some(3);
        let (mut app, _task) = App::with_catalog(sample_catalog(6), &config, None).boot();

        // Window moves from ids {1, 2, 6} to {2, 3, 1}; id 6 is evicted while loading.
        let _ = app.update(Message::Gallery(gallery::Message::Advance));
        let _ = app.update(Message::ImageLoaded {
            id: ArtworkId::new(6),
            result: Ok(pixel()),
        });

        assert!(app.images().status(ArtworkId::new(6)).is_none());
        for id in [1, 2, 3] {
            assert!(app.images().status(ArtworkId::new(id)).is_some());
        }
    }

    #[test]
    fn results_for_unknown_ids_are_ignored() {
        let mut app = app(2);
        let _ = app.update(Message::ImageLoaded {
            id: ArtworkId::new(99),
            result: Ok(pixel()),
        });
        assert!(app.images().status(ArtworkId::new(99)).is_none());
    }

    #[test]
    fn close_request_tears_down_and_cancels_timers() {
        let mut app = app(6);
        let _ = app.update(Message::Gallery(gallery::Message::Advance));
        assert_eq!(app.pending_timers(), 1);

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        assert_eq!(app.pending_timers(), 0);
        assert!(app.gallery().is_torn_down());
        assert!(matches!(
            app.diagnostics().last(),
            Some(DiagnosticEventKind::TornDown { .. })
        ));
    }

    #[test]
    fn tick_subscription_follows_loading_images() {
        let mut app = app(1);
        assert!(app.images().has_loading());
        let _ = app.update(Message::ImageLoaded {
            id: ArtworkId::new(1),
            result: Ok(pixel()),
        });
        assert!(!app.images().has_loading());
        assert!(!app.is_revealing());
    }

    #[test]
    fn from_flags_fails_on_missing_catalog() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            catalog: Some(dir.path().join("missing.toml")),
            config_dir: Some(dir.path().display().to_string()),
            start: None,
        };

        let err = App::from_flags(flags).unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::Io(_))));
    }

    #[test]
    fn from_flags_warns_about_broken_settings() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("settings.toml"), "animation = 3").expect("write settings");
        let flags = Flags {
            config_dir: Some(dir.path().display().to_string()),
            ..Flags::default()
        };

        let app = App::from_flags(flags).expect("builtin catalog loads");
        assert_eq!(app.catalog().len().get(), 6);
        assert!(matches!(
            app.diagnostics().last(),
            Some(DiagnosticEventKind::ConfigWarning { .. })
        ));
    }
}
