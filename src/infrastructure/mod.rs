//! Infrastructure layer with external service adapters.

/// Image service client.
pub mod catalog;
/// Application configuration.
pub mod config;
/// Thumbnail caching and prefetch.
pub mod image;
/// Game screen hand-off.
pub mod navigation;

pub use catalog::HttpImageCatalogClient;
pub use config::{AppConfig, CliArgs, ConfigError, ConfigStore, LogLevel, PrefetchConfig};
pub use image::{CacheStats, ThumbnailCache, ThumbnailPrefetcher, ThumbnailPrefetcherConfig};
pub use navigation::ChannelNavigator;
