//! Thumbnail caching and prefetch.

pub mod memory_cache;
pub mod prefetcher;

pub use memory_cache::{CacheStats, DEFAULT_CACHE_SIZE, ThumbnailCache};
pub use prefetcher::{ThumbnailPrefetcher, ThumbnailPrefetcherConfig};
