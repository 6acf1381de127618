//! In-memory LRU thumbnail cache.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use lru::LruCache;
use tokio::sync::RwLock;
use tracing::{debug, trace};

/// Default maximum number of thumbnails kept in memory.
pub const DEFAULT_CACHE_SIZE: usize = 64;

/// LRU cache of downloaded thumbnail bytes keyed by URL.
pub struct ThumbnailCache {
    cache: RwLock<LruCache<String, Bytes>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ThumbnailCache {
    /// Creates a new cache with the specified capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: RwLock::new(LruCache::new(cap)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns cached bytes for `url`, promoting the entry.
    pub async fn get(&self, url: &str) -> Option<Bytes> {
        let mut cache = self.cache.write().await;
        if let Some(bytes) = cache.get(url) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(url, "Thumbnail cache hit");
            Some(bytes.clone())
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(url, "Thumbnail cache miss");
            None
        }
    }

    /// Stores bytes for `url`.
    pub async fn put(&self, url: String, bytes: Bytes) {
        let mut cache = self.cache.write().await;
        debug!(url = %url, size = bytes.len(), "Storing thumbnail");
        cache.put(url, bytes);
    }

    /// Current number of cached thumbnails.
    pub async fn len(&self) -> usize {
        self.cache.read().await.len()
    }

    /// Returns hit/miss counters.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits,
            misses,
            hit_rate,
        }
    }
}

impl std::fmt::Debug for ThumbnailCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailCache")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Hit rate as a percentage.
    pub hit_rate: f64,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.1}% hit rate ({} hits, {} misses)",
            self.hit_rate, self.hits, self.misses
        )
    }
}
