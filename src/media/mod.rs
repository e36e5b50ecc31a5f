// SPDX-License-Identifier: MPL-2.0
//! Artwork image loading: URI resolution, decoding and the in-memory store.

mod fetch;
mod image;
mod store;

pub use self::image::ImageData;
pub use fetch::{load_artwork_image, FetchOptions, ImageSource};
pub use store::{neighborhood, ImageStatus, ImageStore};
