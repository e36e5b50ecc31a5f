// SPDX-License-Identifier: MPL-2.0
//! User interface for the gallery.
//!
//! Follows the Elm-style "state down, messages up" pattern: views read the
//! gallery state through a [`views::ViewContext`] and emit
//! [`views::Message`]s that the application routes back to the state
//! machine.
//!
//! # Modules
//!
//! - [`views`] - Slider and detail screens, transition mask, image tiles
//! - [`presentation`] - Offsets, opacities and labels derived from state
//! - [`widgets`] - Canvas widgets (spinner, line icons)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod presentation;
pub mod styles;
pub mod views;
pub mod widgets;
