//! Setup screen state and derived views.

use std::sync::Arc;

use crate::domain::entities::{Category, DifficultyLevel, GridSize, ImageRecord};
use crate::domain::errors::RetrievalError;
use crate::domain::services::Paginator;

/// Number of gallery tiles per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Everything the setup screen shows.
///
/// Only stored facts live here; page counts, the visible window and the
/// allowed grid sizes are recomputed on every read.
#[derive(Debug, Clone)]
pub struct SetupState {
    pub(super) active_category: Category,
    pub(super) images: Arc<[ImageRecord]>,
    pub(super) images_category: Option<Category>,
    pub(super) loading: bool,
    pub(super) page: usize,
    pub(super) page_size: usize,
    pub(super) difficulty: DifficultyLevel,
    pub(super) grid_size: GridSize,
    pub(super) selected_image: Option<String>,
    pub(super) last_error: Option<RetrievalError>,
}

impl SetupState {
    /// Creates the initial state: no images, first page, default difficulty.
    ///
    /// A `page_size` of zero is treated as one.
    #[must_use]
    pub fn new(category: Category, page_size: usize) -> Self {
        let difficulty = DifficultyLevel::default();
        Self {
            active_category: category,
            images: Vec::new().into(),
            images_category: None,
            loading: false,
            page: 0,
            page_size: page_size.max(1),
            difficulty,
            grid_size: difficulty.default_size(),
            selected_image: None,
            last_error: None,
        }
    }

    /// Category whose gallery is requested.
    #[must_use]
    pub const fn active_category(&self) -> Category {
        self.active_category
    }

    /// Full list currently displayed.
    #[must_use]
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    /// Category the displayed list was fetched for, if any.
    #[must_use]
    pub const fn images_category(&self) -> Option<Category> {
        self.images_category
    }

    /// Returns true when the displayed list belongs to the active category.
    #[must_use]
    pub fn images_are_current(&self) -> bool {
        self.images_category == Some(self.active_category)
    }

    /// Returns true while the active category's list is being fetched.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Tiles per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Selected difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    /// Selected grid size, always allowed by [`Self::difficulty`].
    #[must_use]
    pub const fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    /// URL of the selected image.
    #[must_use]
    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image.as_deref()
    }

    /// Error from the most recent failed load of the active category.
    #[must_use]
    pub const fn last_error(&self) -> Option<&RetrievalError> {
        self.last_error.as_ref()
    }

    /// Number of pages over the displayed list.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        Paginator::total_pages(self.images.len(), self.page_size)
    }

    /// Records on the current page.
    #[must_use]
    pub fn visible_images(&self) -> &[ImageRecord] {
        Paginator::visible_slice(&self.images, self.page, self.page_size)
    }

    /// Returns true if a page follows the current one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    /// Returns true if a page precedes the current one.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    /// Grid sizes offered at the selected difficulty.
    #[must_use]
    pub const fn allowed_grid_sizes(&self) -> &'static [u32] {
        self.difficulty.allowed_sizes()
    }

    /// Returns true if `image_url` is the current selection.
    #[must_use]
    pub fn is_selected(&self, image_url: &str) -> bool {
        self.selected_image.as_deref() == Some(image_url)
    }

    /// Returns true when Start would launch a game.
    #[must_use]
    pub const fn can_start(&self) -> bool {
        self.selected_image.is_some()
    }

    /// Skeleton tiles to draw in place of the gallery.
    #[must_use]
    pub const fn placeholder_count(&self) -> usize {
        if self.loading { self.page_size } else { 0 }
    }

    pub(super) fn contains_image(&self, image_url: &str) -> bool {
        self.images.iter().any(|record| record.image_url() == image_url)
    }

    pub(super) fn clamp_page(&mut self) {
        self.page = Paginator::clamp_page(self.page, self.images.len(), self.page_size);
    }
}
