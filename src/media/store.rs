// SPDX-License-Identifier: MPL-2.0
//! Per-artwork image status with LRU eviction.
//!
//! The store only tracks state; fetching happens in Iced tasks started by the
//! application, which report back through [`ImageStore::finish`].

use super::ImageData;
use crate::catalog::ArtworkId;
use crate::error::ImageError;
use lru::LruCache;
use std::num::NonZeroUsize;

/// What the renderer should show for an artwork image.
#[derive(Debug, Clone)]
pub enum ImageStatus {
    Loading,
    Ready(ImageData),
    Failed(ImageError),
}

/// Image states keyed by artwork id, least recently used evicted first.
#[derive(Debug)]
pub struct ImageStore {
    entries: LruCache<ArtworkId, ImageStatus>,
}

impl ImageStore {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Marks `id` as loading. Returns `true` when a fetch must be started,
    /// i.e. the id is neither cached, loading nor failed.
    pub fn begin(&mut self, id: ArtworkId) -> bool {
        if self.entries.get(&id).is_some() {
            return false;
        }
        self.entries.put(id, ImageStatus::Loading);
        true
    }

    /// Stores the outcome of a fetch started by [`ImageStore::begin`].
    ///
    /// Results for ids that were evicted while loading are dropped, so a
    /// late fetch never pushes out an entry that is still wanted. Returns
    /// whether the result was kept.
    pub fn finish(&mut self, id: ArtworkId, result: Result<ImageData, ImageError>) -> bool {
        let Some(entry) = self.entries.peek_mut(&id) else {
            return false;
        };
        *entry = match result {
            Ok(data) => ImageStatus::Ready(data),
            Err(err) => ImageStatus::Failed(err),
        };
        true
    }

    /// Drops whatever is known about `id`, so the next `begin` refetches.
    pub fn forget(&mut self, id: ArtworkId) -> bool {
        self.entries.pop(&id).is_some()
    }

    /// Status of `id` without touching recency.
    #[must_use]
    pub fn status(&self, id: ArtworkId) -> Option<&ImageStatus> {
        self.entries.peek(&id)
    }

    /// Whether any fetch is still running.
    #[must_use]
    pub fn has_loading(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, status)| matches!(status, ImageStatus::Loading))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Indices to load around `current`: itself first, then alternating
/// next/previous neighbours out to `radius`, wrapping, without repeats.
#[must_use]
pub fn neighborhood(current: usize, len: usize, radius: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }

    let current = current % len;
    let mut order = vec![current];
    for step in 1..=radius {
        let offset = step % len;
        for index in [(current + offset) % len, (current + len - offset) % len] {
            if !order.contains(&index) {
                order.push(index);
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: u32) -> ArtworkId {
        ArtworkId::new(value)
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn begin_only_once_per_id() {
        let mut store = ImageStore::new(4);
        assert!(store.begin(id(1)));
        assert!(!store.begin(id(1)));
        assert!(store.has_loading());
    }

    #[test]
    fn finish_records_ready_and_failed() {
        let mut store = ImageStore::new(4);
        store.begin(id(1));
        store.begin(id(2));
        store.finish(id(1), Ok(pixel()));
        store.finish(id(2), Err(ImageError::HttpStatus(404)));

        assert!(matches!(store.status(id(1)), Some(ImageStatus::Ready(_))));
        assert!(matches!(
            store.status(id(2)),
            Some(ImageStatus::Failed(ImageError::HttpStatus(404)))
        ));
        assert!(!store.has_loading());
        // Failures are sticky until forgotten.
        assert!(!store.begin(id(2)));
        assert!(store.forget(id(2)));
        assert!(store.begin(id(2)));
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut store = ImageStore::new(2);
        store.begin(id(1));
        store.begin(id(2));
        // Touch 1 so 2 becomes the eviction candidate.
        assert!(!store.begin(id(1)));
        store.begin(id(3));

        assert!(store.status(id(1)).is_some());
        assert!(store.status(id(2)).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn late_result_for_evicted_id_is_dropped() {
        let mut store = ImageStore::new(2);
        store.begin(id(1));
        store.begin(id(2));
        store.begin(id(3));

        assert!(!store.finish(id(1), Ok(pixel())));
        assert!(store.status(id(1)).is_none());
        assert!(store.status(id(2)).is_some());
        assert!(store.status(id(3)).is_some());
        assert!(store.finish(id(3), Ok(pixel())));
    }

    #[test]
    fn zero_capacity_still_holds_one_entry() {
        let mut store = ImageStore::new(0);
        store.begin(id(1));
        assert!(store.finish(id(1), Ok(pixel())));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn neighborhood_alternates_and_wraps() {
        assert_eq!(neighborhood(0, 6, 1), vec![0, 1, 5]);
        assert_eq!(neighborhood(3, 6, 2), vec![3, 4, 2, 5, 1]);
        assert_eq!(neighborhood(2, 6, 0), vec![2]);
    }

    #[test]
    fn neighborhood_deduplicates_small_catalogs() {
        assert_eq!(neighborhood(0, 2, 3), vec![0, 1]);
        assert_eq!(neighborhood(0, 1, 2), vec![0]);
        assert!(neighborhood(0, 0, 1).is_empty());
    }
}
