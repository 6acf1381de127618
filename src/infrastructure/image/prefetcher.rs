//! Background thumbnail downloader backing the gallery prefetch.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, Semaphore, mpsc};
use tracing::{debug, error, trace};

use super::memory_cache::{CacheStats, DEFAULT_CACHE_SIZE, ThumbnailCache};
use crate::domain::errors::RetrievalError;
use crate::domain::ports::ThumbnailWarmerPort;

/// Configuration for the thumbnail prefetcher.
#[derive(Debug, Clone)]
pub struct ThumbnailPrefetcherConfig {
    /// Maximum thumbnails kept in memory.
    pub cache_size: usize,
    /// Maximum concurrent downloads.
    pub max_concurrent: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ThumbnailPrefetcherConfig {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
            max_concurrent: 4,
            timeout_secs: 15,
        }
    }
}

#[derive(Debug)]
enum PrefetchCommand {
    Warm { url: String },
    CancelAll,
}

/// Downloads thumbnails into a [`ThumbnailCache`] on a detached worker.
///
/// Requests are fire-and-forget: duplicates are collapsed, cached URLs are
/// skipped and failures are only logged.
///
/// The shell only prints thumbnail URLs, so nothing renders from the cache.
/// It stands in for the image cache of a graphical host: warming fills it,
/// repeated warms of the same URL count as hits, and the binary logs its
/// counters when the session ends.
pub struct ThumbnailPrefetcher {
    cache: Arc<ThumbnailCache>,
    pending: Arc<RwLock<HashSet<String>>>,
    request_tx: mpsc::UnboundedSender<PrefetchCommand>,
    config: ThumbnailPrefetcherConfig,
}

impl std::fmt::Debug for ThumbnailPrefetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailPrefetcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// State for the background worker loop.
struct WorkerState {
    cache: Arc<ThumbnailCache>,
    pending: Arc<RwLock<HashSet<String>>>,
    http_client: reqwest::Client,
    semaphore: Arc<Semaphore>,
    request_rx: mpsc::UnboundedReceiver<PrefetchCommand>,
}

impl ThumbnailPrefetcher {
    /// Creates the prefetcher and spawns its worker.
    ///
    /// Must be called from inside a tokio runtime. The worker stops when the
    /// prefetcher is dropped.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: ThumbnailPrefetcherConfig) -> Result<Self, RetrievalError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RetrievalError::client(format!("failed to create HTTP client: {e}")))?;

        let cache = Arc::new(ThumbnailCache::new(config.cache_size));
        let pending = Arc::new(RwLock::new(HashSet::new()));
        let (request_tx, request_rx) = mpsc::unbounded_channel();

        let worker_state = WorkerState {
            cache: cache.clone(),
            pending: pending.clone(),
            http_client,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
            request_rx,
        };

        tokio::spawn(Self::run_worker_loop(worker_state));

        Ok(Self {
            cache,
            pending,
            request_tx,
            config,
        })
    }

    async fn run_worker_loop(mut state: WorkerState) {
        let mut queue: VecDeque<String> = VecDeque::new();

        loop {
            tokio::select! {
                cmd = state.request_rx.recv() => {
                    match cmd {
                        Some(PrefetchCommand::Warm { url }) => {
                            if !queue.contains(&url) {
                                queue.push_back(url);
                            }
                        }
                        Some(PrefetchCommand::CancelAll) => {
                            if !queue.is_empty() {
                                debug!(count = queue.len(), "Dropped queued thumbnail prefetches");
                            }
                            queue.clear();
                        }
                        None => break,
                    }
                }
                Ok(permit) = state.semaphore.clone().acquire_owned(), if !queue.is_empty() => {
                    if let Some(url) = queue.pop_front() {
                        let cache = state.cache.clone();
                        let pending = state.pending.clone();
                        let http_client = state.http_client.clone();

                        tokio::spawn(async move {
                            if cache.get(&url).await.is_some() {
                                trace!(url = %url, "Thumbnail already cached");
                                return;
                            }
                            if !pending.write().await.insert(url.clone()) {
                                return;
                            }

                            if let Err(e) = Self::download(&http_client, &cache, &url).await {
                                debug!(url = %url, error = %e, "Thumbnail prefetch failed");
                            }

                            pending.write().await.remove(&url);
                            drop(permit);
                        });
                    }
                }
            }
        }

        trace!("Thumbnail prefetch worker stopped");
    }

    async fn download(
        client: &reqwest::Client,
        cache: &ThumbnailCache,
        url: &str,
    ) -> Result<(), RetrievalError> {
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| RetrievalError::network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RetrievalError::status(response.status().as_u16(), url));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RetrievalError::network(format!("failed to read body: {e}")))?;

        cache.put(url.to_string(), bytes).await;
        Ok(())
    }

    /// Number of thumbnails currently held.
    pub async fn cached_count(&self) -> usize {
        self.cache.len().await
    }

    /// Hit/miss counters of the thumbnail cache.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Returns the number of downloads in progress.
    pub async fn pending_count(&self) -> usize {
        self.pending.read().await.len()
    }
}

impl ThumbnailWarmerPort for ThumbnailPrefetcher {
    fn warm(&self, url: String) {
        if let Err(e) = self.request_tx.send(PrefetchCommand::Warm { url }) {
            error!("Failed to queue thumbnail prefetch: {}", e);
        }
    }

    fn cancel_all(&self) {
        if let Err(e) = self.request_tx.send(PrefetchCommand::CancelAll) {
            error!("Failed to cancel thumbnail prefetches: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_thumbnail(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: image/jpeg\r\ncontent-length: 4\r\nconnection: close\r\n\r\njpeg"
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/upload/w_260,h_195,c_fill,f_auto,q_auto/fox.jpg")
    }

    async fn wait_until_cached(prefetcher: &ThumbnailPrefetcher) -> bool {
        for _ in 0..100 {
            if prefetcher.cached_count().await > 0 {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        false
    }

    #[tokio::test]
    async fn test_prefetcher_creation() {
        let prefetcher = ThumbnailPrefetcher::new(ThumbnailPrefetcherConfig::default());
        assert!(prefetcher.is_ok());
        assert_eq!(prefetcher.unwrap().pending_count().await, 0);
    }

    #[tokio::test]
    async fn test_warm_downloads_into_cache() {
        let url = serve_thumbnail("200 OK").await;
        let prefetcher = ThumbnailPrefetcher::new(ThumbnailPrefetcherConfig::default()).unwrap();

        prefetcher.warm(url.clone());

        assert!(wait_until_cached(&prefetcher).await);
        assert_eq!(
            prefetcher.cache.get(&url).await,
            Some(bytes::Bytes::from_static(b"jpeg"))
        );
        assert_eq!(prefetcher.cached_count().await, 1);
    }

    #[tokio::test]
    async fn test_rewarming_cached_url_counts_as_hit() {
        let url = serve_thumbnail("200 OK").await;
        let prefetcher = ThumbnailPrefetcher::new(ThumbnailPrefetcherConfig::default()).unwrap();

        prefetcher.warm(url.clone());
        assert!(wait_until_cached(&prefetcher).await);
        let before = prefetcher.cache_stats();

        prefetcher.warm(url.clone());
        for _ in 0..100 {
            if prefetcher.cache_stats().hits > before.hits {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        let after = prefetcher.cache_stats();
        assert_eq!(after.hits, before.hits + 1);
        assert_eq!(after.misses, before.misses);
        assert_eq!(prefetcher.cached_count().await, 1);
    }

    #[tokio::test]
    async fn test_failed_download_is_swallowed() {
        let url = serve_thumbnail("404 Not Found").await;
        let prefetcher = ThumbnailPrefetcher::new(ThumbnailPrefetcherConfig::default()).unwrap();

        prefetcher.warm(url.clone());

        assert!(!wait_until_cached(&prefetcher).await);
        assert_eq!(prefetcher.pending_count().await, 0);
    }
}
