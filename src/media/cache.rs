// SPDX-License-Identifier: MPL-2.0
//! Cache of decoded thumbnails.
//!
//! Reopening a gallery or switching between galleries that share images
//! should not decode the same file twice. Entries are keyed by source
//! locator and requested edge size, and evicted least recently used first.

use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    source: String,
    max_edge: u32,
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// LRU cache of decoded thumbnails.
pub struct ThumbnailCache {
    cache: LruCache<CacheKey, ImageData>,
    hits: u64,
    misses: u64,
}

impl std::fmt::Debug for ThumbnailCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailCache")
            .field("stats", &self.stats())
            .finish()
    }
}

impl ThumbnailCache {
    /// Creates a cache holding at most `capacity` thumbnails (minimum one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns a cached thumbnail and marks it recently used.
    pub fn get(&mut self, source: &str, max_edge: u32) -> Option<ImageData> {
        let key = CacheKey {
            source: source.to_string(),
            max_edge,
        };
        match self.cache.get(&key) {
            Some(image) => {
                self.hits += 1;
                Some(image.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, source: &str, max_edge: u32, image: ImageData) {
        let key = CacheKey {
            source: source.to_string(),
            max_edge,
        };
        self.cache.put(key, image);
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn get_after_insert_hits() {
        let mut cache = ThumbnailCache::new(4);
        cache.insert("a.png", 160, pixel());

        assert!(cache.get("a.png", 160).is_some());
        assert!(cache.get("a.png", 320).is_none());
        assert_eq!(
            cache.stats(),
            CacheStats {
                entries: 1,
                hits: 1,
                misses: 1
            }
        );
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let mut cache = ThumbnailCache::new(2);
        cache.insert("a.png", 160, pixel());
        cache.insert("b.png", 160, pixel());
        assert!(cache.get("a.png", 160).is_some());
        cache.insert("c.png", 160, pixel());

        assert!(cache.get("a.png", 160).is_some());
        assert!(cache.get("b.png", 160).is_none());
        assert!(cache.get("c.png", 160).is_some());
    }

    #[test]
    fn zero_capacity_still_holds_one_entry() {
        let mut cache = ThumbnailCache::new(0);
        cache.insert("a.png", 160, pixel());
        assert_eq!(cache.stats().entries, 1);
        cache.clear();
        assert_eq!(cache.stats().entries, 0);
    }
}
