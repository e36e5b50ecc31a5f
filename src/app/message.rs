// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::ArtworkId;
use crate::error::ImageError;
use crate::gallery;
use crate::media::ImageData;
use crate::ui::views;
use iced::keyboard;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Input from the gallery screens.
    View(views::Message),
    /// A gallery message not originating from a widget (timers, keyboard).
    Gallery(gallery::Message),
    /// A key was pressed and nothing in the widget tree captured it.
    KeyPressed {
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    },
    /// An image fetch finished.
    ImageLoaded {
        id: ArtworkId,
        result: Result<ImageData, ImageError>,
    },
    Tick(Instant), // Periodic tick for the reveal and loading spinner
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Catalog file to show instead of the built-in one.
    /// Takes precedence over `[catalog].path` in `settings.toml`.
    pub catalog: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Index of the artwork shown first, clamped to the catalog.
    pub start: Option<usize>,
}
