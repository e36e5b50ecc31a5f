// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` presents an artwork catalog as an animated slider with a
//! full-bleed detail view, built with the Iced GUI framework.
//!
//! The [`gallery`] state machine is toolkit-free and decides what shows and
//! which timers run; [`app`] wires it to Iced tasks, image fetching and the
//! [`ui`] screens.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gallery;
pub mod media;
pub mod ui;
