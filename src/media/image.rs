// SPDX-License-Identifier: MPL-2.0
//! Decoded artwork bitmaps ready for the Iced image widget.

use crate::error::ImageError;
use iced::widget::image;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Decodes encoded bytes (JPEG, PNG, WebP, ...) into RGBA pixels.
    ///
    /// A corrupt download surfaces here as [`ImageError::Decode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, ImageError> {
        let decoded =
            image_rs::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self::from_rgba(width, height, rgba.into_raw()))
    }

    /// Width divided by height, 1.0 for degenerate sizes.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}
