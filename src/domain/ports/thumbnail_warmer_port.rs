//! Port definition for thumbnail cache warming.

/// Best-effort priming of a downstream thumbnail cache.
///
/// `warm` must return immediately; failures are never reported back.
pub trait ThumbnailWarmerPort: Send + Sync {
    /// Requests that `url` be fetched into the cache.
    fn warm(&self, url: String);

    /// Drops every queued warm request.
    fn cancel_all(&self) {}
}

/// Warmer that ignores every request, used when prefetching is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopWarmer;

impl ThumbnailWarmerPort for NoopWarmer {
    fn warm(&self, _url: String) {}
}
