// SPDX-License-Identifier: MPL-2.0
//! Artwork catalog: the fixed, ordered list of records the gallery shows.
//!
//! A [`Catalog`] is read-only configuration, injected at start-up. It can be
//! built from the embedded default file, from a user-supplied TOML file, or
//! directly from records (tests). Construction validates the two invariants
//! the rest of the crate relies on: the list is non-empty and ids are unique.
//!
//! # File format
//!
//! ```toml
//! [[artwork]]
//! id = 1
//! title = "Landscape"
//! artist = "Claude Monet"
//! description = "Rolling hills meet golden horizons."
//! year = "1876"
//! medium = "Oil on Canvas"
//! dimensions = "81 × 100 cm"
//! collection = "Musée d'Orsay, Paris"
//! style = "Impressionism"
//! image = "https://example.org/landscape.jpg"
//! ```

mod embedded;

use crate::media::ImageSource;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::Path;

/// Stable identity of an artwork, used as key for image caching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(u32);

impl ArtworkId {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One artwork as displayed by the slider and detail views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub id: ArtworkId,
    pub title: String,
    pub artist: String,
    pub description: String,
    pub year: String,
    pub medium: String,
    pub dimensions: String,
    pub collection: String,
    pub style: String,
    /// URI of the bitmap (http/https, `file://` or plain path).
    pub image: String,
}

/// Errors raised while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog contains no records.
    Empty,
    /// Two records share the same id.
    DuplicateId(ArtworkId),
    /// The TOML document could not be parsed.
    Parse(String),
    /// The catalog file could not be read.
    Io(String),
    /// The embedded default catalog is missing from the binary.
    MissingBuiltin,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog contains no artwork"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate artwork id {}", id),
            CatalogError::Parse(msg) => write!(f, "invalid catalog file: {}", msg),
            CatalogError::Io(msg) => write!(f, "cannot read catalog: {}", msg),
            CatalogError::MissingBuiltin => write!(f, "built-in catalog is missing"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// On-disk layout: an array of `[[artwork]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    artwork: Vec<ArtworkRecord>,
}

/// Immutable, non-empty, ordered list of artworks with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ArtworkRecord>,
}

impl Catalog {
    /// Validates and wraps the given records.
    pub fn new(records: Vec<ArtworkRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }

        Ok(Self { records })
    }

    /// Parses a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(file.artwork)
    }

    /// Loads a catalog file from disk.
    ///
    /// Relative local image paths are resolved against the file's directory.
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
        let mut catalog = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            catalog.resolve_relative_images(base);
        }
        Ok(catalog)
    }

    fn resolve_relative_images(&mut self, base: &Path) {
        for record in &mut self.records {
            if let Ok(ImageSource::Local(local)) = ImageSource::parse(&record.image) {
                if local.is_relative() {
                    record.image = base.join(local).to_string_lossy().into_owned();
                }
            }
        }
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        let content = embedded::default_catalog().ok_or(CatalogError::MissingBuiltin)?;
        Self::from_toml_str(&content)
    }

    /// Number of records, never zero.
    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        // `new` rejects empty lists.
        NonZeroUsize::new(self.records.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Record at `index`, clamped to the last record.
    #[must_use]
    pub fn at(&self, index: usize) -> &ArtworkRecord {
        let last = self.records.len() - 1;
        &self.records[index.min(last)]
    }

    /// Record at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ArtworkRecord> {
        self.records.get(index)
    }

    /// Records in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ArtworkRecord> {
        self.records.iter()
    }

    /// Index of the record with the given id.
    #[must_use]
    pub fn position(&self, id: ArtworkId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }
}
