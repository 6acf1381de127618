//! Per-category image list cache.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::entities::{Category, ImageRecord};

/// Session-lifetime store of fetched image lists, keyed by category.
///
/// Entries never expire and the store is unbounded. It also tracks which
/// categories have a fetch in flight so a second request for the same
/// category can join the first instead of issuing another call.
#[derive(Debug, Default)]
pub struct CategoryCache {
    entries: HashMap<Category, Arc<[ImageRecord]>>,
    in_flight: HashSet<Category>,
}

impl CategoryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached list if `category` has been stored.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<Arc<[ImageRecord]>> {
        let entry = self.entries.get(&category).cloned();
        trace!(category = %category, hit = entry.is_some(), "Category cache lookup");
        entry
    }

    /// Stores `images` for `category`, replacing any previous list.
    pub fn put(&mut self, category: Category, images: Arc<[ImageRecord]>) {
        debug!(category = %category, count = images.len(), "Caching image list");
        self.entries.insert(category, images);
    }

    /// Returns true if `category` has a stored list.
    #[must_use]
    pub fn contains(&self, category: Category) -> bool {
        self.entries.contains_key(&category)
    }

    /// Marks a fetch for `category` as started.
    ///
    /// Returns false when one was already in flight.
    pub fn begin_fetch(&mut self, category: Category) -> bool {
        self.in_flight.insert(category)
    }

    /// Clears the in-flight marker for `category`.
    pub fn finish_fetch(&mut self, category: Category) {
        self.in_flight.remove(&category);
    }

    /// Returns true if a fetch for `category` is in flight.
    #[must_use]
    pub fn is_fetching(&self, category: Category) -> bool {
        self.in_flight.contains(&category)
    }

    /// Number of cached categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every stored list. In-flight markers are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        debug!("Cleared category cache");
    }
}
