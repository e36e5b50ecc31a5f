// SPDX-License-Identifier: MPL-2.0
use crate::catalog::{ArtworkId, CatalogError};
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Image(ImageError),
}

/// Reasons an artwork image could not be turned into a displayable handle.
/// Travels inside UI messages, so it stays `Clone` and string-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The record carries an empty or unusable URI.
    InvalidUri(String),

    /// Connection, TLS or timeout failure while fetching.
    Network(String),

    /// The server answered with a non-success status.
    HttpStatus(u16),

    /// The response body exceeded the configured byte cap.
    TooLarge { limit: usize },

    /// Bytes were received but are not a decodable bitmap.
    Decode(String),

    /// Local file could not be read.
    Io(String),
}

impl ImageError {
    /// Short text shown on the placeholder tile.
    pub fn placeholder_text(&self) -> &'static str {
        match self {
            ImageError::InvalidUri(_) => "No image available",
            ImageError::Network(_) | ImageError::HttpStatus(_) => "Image could not be reached",
            ImageError::TooLarge { .. } => "Image is too large",
            ImageError::Decode(_) => "Image format not supported",
            ImageError::Io(_) => "Image file could not be read",
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::InvalidUri(uri) => write!(f, "Invalid image URI: {:?}", uri),
            ImageError::Network(msg) => write!(f, "Network error: {}", msg),
            ImageError::HttpStatus(code) => write!(f, "HTTP status: {}", code),
            ImageError::TooLarge { limit } => {
                write!(f, "Image exceeds {} bytes", limit)
            }
            ImageError::Decode(msg) => write!(f, "Decoding failed: {}", msg),
            ImageError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ImageError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Convenience for messages that mention a record.
pub(crate) fn describe_artwork(id: ArtworkId, err: &ImageError) -> String {
    format!("artwork {}: {}", id, err)
}

pub type Result<T> = std::result::Result<T, Error>;
