// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[animation]` - Phase delays of slide and detail transitions
//! - `[images]` - Image cache size, neighbour prefetch, request timeout
//! - `[catalog]` - Optional path to a custom catalog file
//! - `[diagnostics]` - Diagnostic event buffer size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument, passed to `load_with_override()` by `App::from_flags`
//! 3. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let timings = config.timings();
//! assert!(timings.slide_lock.value() >= 1);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::gallery::{Timings, TransitionDelay};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Transition phase delays in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_lock_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_midpoint_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_settle_ms: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            slide_lock_ms: Some(DEFAULT_SLIDE_LOCK_MS),
            detail_midpoint_ms: Some(DEFAULT_DETAIL_MIDPOINT_MS),
            detail_settle_ms: Some(DEFAULT_DETAIL_SETTLE_MS),
        }
    }
}

/// Artwork image loading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImagesConfig {
    /// Number of decoded images kept in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_capacity: Option<usize>,

    /// Neighbours preloaded on each side of the current artwork.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefetch_neighbors: Option<usize>,

    /// Timeout for one remote image request, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            cache_capacity: Some(DEFAULT_IMAGE_CACHE_CAPACITY),
            prefetch_neighbors: Some(DEFAULT_PREFETCH_NEIGHBORS),
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Custom catalog file; the built-in catalog is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Transition timings with defaults filled in and values clamped.
    #[must_use]
    pub fn timings(&self) -> Timings {
        let anim = &self.animation;
        Timings {
            slide_lock: TransitionDelay::new(anim.slide_lock_ms.unwrap_or(DEFAULT_SLIDE_LOCK_MS)),
            detail_midpoint: TransitionDelay::new(
                anim.detail_midpoint_ms
                    .unwrap_or(DEFAULT_DETAIL_MIDPOINT_MS),
            ),
            detail_settle: TransitionDelay::new(
                anim.detail_settle_ms.unwrap_or(DEFAULT_DETAIL_SETTLE_MS),
            ),
        }
    }

    /// Image cache capacity, clamped and never smaller than the prefetch
    /// window (the current artwork plus its neighbours on both sides).
    #[must_use]
    pub fn image_cache_capacity(&self) -> usize {
        self.images
            .cache_capacity
            .unwrap_or(DEFAULT_IMAGE_CACHE_CAPACITY)
            .clamp(MIN_IMAGE_CACHE_CAPACITY, MAX_IMAGE_CACHE_CAPACITY)
            .max(self.prefetch_window())
    }

    /// Number of images requested around the current artwork.
    #[must_use]
    pub fn prefetch_window(&self) -> usize {
        2 * self.prefetch_neighbors() + 1
    }

    /// Neighbour prefetch count, clamped.
    #[must_use]
    pub fn prefetch_neighbors(&self) -> usize {
        self.images
            .prefetch_neighbors
            .unwrap_or(DEFAULT_PREFETCH_NEIGHBORS)
            .min(MAX_PREFETCH_NEIGHBORS)
    }

    /// Remote request timeout, clamped.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .images
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Diagnostics buffer capacity, unclamped (see `BufferCapacity`).
    #[must_use]
    pub fn diagnostics_capacity(&self) -> usize {
        self.diagnostics
            .buffer_capacity
            .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Writes the configuration to the default path, returning where it went.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<Option<PathBuf>> {
    match get_config_path_with_override(base_dir) {
        Some(path) => {
            save_to_path(config, &path)?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
