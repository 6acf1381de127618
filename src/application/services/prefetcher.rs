//! Look-ahead warming of the next gallery page.

use std::sync::Arc;

use tracing::trace;

use crate::domain::entities::ImageRecord;
use crate::domain::ports::ThumbnailWarmerPort;
use crate::domain::services::{Paginator, resolve_thumbnail_url};

/// Issues cache warms for the thumbnails of the page after the current one.
#[derive(Clone)]
pub struct Prefetcher {
    warmer: Arc<dyn ThumbnailWarmerPort>,
}

impl std::fmt::Debug for Prefetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prefetcher").finish_non_exhaustive()
    }
}

impl Prefetcher {
    /// Creates a prefetcher backed by `warmer`.
    #[must_use]
    pub fn new(warmer: Arc<dyn ThumbnailWarmerPort>) -> Self {
        Self { warmer }
    }

    /// Warms thumbnails for page `page + 1` and returns how many were requested.
    pub fn prefetch_next_page(&self, images: &[ImageRecord], page: usize, page_size: usize) -> usize {
        let upcoming = Paginator::next_page_slice(images, page, page_size);
        for record in upcoming {
            self.warmer.warm(resolve_thumbnail_url(record.image_url()));
        }
        if !upcoming.is_empty() {
            trace!(page = page + 1, count = upcoming.len(), "Prefetching next page thumbnails");
        }
        upcoming.len()
    }

    /// Drops queued warm requests.
    pub fn cancel(&self) {
        self.warmer.cancel_all();
    }
}
