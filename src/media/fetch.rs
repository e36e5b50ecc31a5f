// SPDX-License-Identifier: MPL-2.0
//! Resolving artwork image URIs into decoded bitmaps.
//!
//! Remote images (`http://`, `https://`) are downloaded with `reqwest`,
//! streamed with a size cap. Anything else is treated as a local path,
//! with an optional `file://` prefix.

use super::ImageData;
use crate::config::{DEFAULT_REQUEST_TIMEOUT_SECS, MAX_IMAGE_BYTES};
use crate::error::ImageError;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Where an artwork image lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    Local(PathBuf),
}

impl ImageSource {
    /// Classifies a URI. Empty URIs are rejected.
    pub fn parse(uri: &str) -> Result<Self, ImageError> {
        let trimmed = uri.trim();
        if trimmed.is_empty() {
            return Err(ImageError::InvalidUri(uri.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(ImageSource::Remote(trimmed.to_string()));
        }

        let path = trimmed.strip_prefix("file://").unwrap_or(trimmed);
        if path.is_empty() {
            return Err(ImageError::InvalidUri(uri.to_string()));
        }
        Ok(ImageSource::Local(PathBuf::from(path)))
    }
}

/// Limits applied while fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub max_bytes: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_bytes: MAX_IMAGE_BYTES,
        }
    }
}

/// Fetches and decodes the image behind `uri`.
pub async fn load_artwork_image(
    uri: String,
    options: FetchOptions,
) -> Result<ImageData, ImageError> {
    let bytes = match ImageSource::parse(&uri)? {
        ImageSource::Remote(url) => fetch_remote(&url, options).await?,
        ImageSource::Local(path) => read_local(&path, options).await?,
    };
    ImageData::decode(&bytes)
}

/// HTTP client shared by every remote fetch, built on first use.
///
/// The timeout is set per request so one client serves any `FetchOptions`.
fn shared_client() -> Result<&'static reqwest::Client, ImageError> {
    static CLIENT: OnceLock<Result<reqwest::Client, String>> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::limited(10))
                .user_agent(USER_AGENT)
                .build()
                .map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|message| ImageError::Network(message.clone()))
}

async fn fetch_remote(url: &str, options: FetchOptions) -> Result<Vec<u8>, ImageError> {
    use futures_util::StreamExt;

    let response = shared_client()?
        .get(url)
        .timeout(options.timeout)
        .send()
        .await
        .map_err(|e| ImageError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ImageError::HttpStatus(response.status().as_u16()));
    }

    let limit = options.max_bytes;
    if response
        .content_length()
        .is_some_and(|declared| declared > limit as u64)
    {
        return Err(ImageError::TooLarge { limit });
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| ImageError::Network(e.to_string()))?;
        if body.len() + chunk.len() > limit {
            return Err(ImageError::TooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

async fn read_local(path: &Path, options: FetchOptions) -> Result<Vec<u8>, ImageError> {
    let io_error = |e: std::io::Error| ImageError::Io(format!("{}: {}", path.display(), e));

    let metadata = tokio::fs::metadata(path).await.map_err(io_error)?;
    let limit = options.max_bytes;
    if metadata.len() > limit as u64 {
        return Err(ImageError::TooLarge { limit });
    }
    tokio::fs::read(path).await.map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn remote_fetches_share_one_client() {
        let first = shared_client().expect("client builds");
        let second = shared_client().expect("client builds");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn parse_classifies_remote_and_local() {
        assert_eq!(
            ImageSource::parse("https://example.org/a.jpg"),
            Ok(ImageSource::Remote("https://example.org/a.jpg".into()))
        );
        assert_eq!(
            ImageSource::parse("HTTP://example.org/a.jpg"),
            Ok(ImageSource::Remote("HTTP://example.org/a.jpg".into()))
        );
        assert_eq!(
            ImageSource::parse("file:///srv/art/a.png"),
            Ok(ImageSource::Local(PathBuf::from("/srv/art/a.png")))
        );
        assert_eq!(
            ImageSource::parse("art/a.png"),
            Ok(ImageSource::Local(PathBuf::from("art/a.png")))
        );
    }

    #[test]
    fn parse_rejects_empty_uris() {
        assert!(matches!(
            ImageSource::parse("   "),
            Err(ImageError::InvalidUri(_))
        ));
        assert!(matches!(
            ImageSource::parse("file://"),
            Err(ImageError::InvalidUri(_))
        ));
    }

    #[tokio::test]
    async fn local_png_is_decoded() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("art.png");
        image_rs::RgbaImage::from_pixel(5, 7, image_rs::Rgba([10, 20, 30, 255]))
            .save(&path)
            .expect("write png");

        let uri = format!("file://{}", path.display());
        let data = load_artwork_image(uri, FetchOptions::default())
            .await
            .expect("local image loads");

        assert_eq!((data.width, data.height), (5, 7));
    }

    #[tokio::test]
    async fn missing_local_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing.png");

        let err = load_artwork_image(path.display().to_string(), FetchOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ImageError::Io(_)));
    }

    #[tokio::test]
    async fn oversized_local_file_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("big.bin");
        std::fs::write(&path, vec![0u8; 64]).expect("write file");
        let options = FetchOptions {
            max_bytes: 16,
            ..FetchOptions::default()
        };

        let err = load_artwork_image(path.display().to_string(), options)
            .await
            .unwrap_err();

        assert_eq!(err, ImageError::TooLarge { limit: 16 });
    }

    #[tokio::test]
    async fn non_image_local_file_is_decode_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "plain text").expect("write file");

        let err = load_artwork_image(path.display().to_string(), FetchOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ImageError::Decode(_)));
    }
}
