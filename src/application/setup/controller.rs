//! Setup screen state machine.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

use super::state::SetupState;
use crate::application::services::{CategoryCache, Prefetcher};
use crate::application::use_cases::LoadCategoryUseCase;
use crate::domain::entities::{Category, DifficultyLevel, GridSize, ImageRecord, LaunchPayload};
use crate::domain::errors::RetrievalError;
use crate::domain::ports::NavigationPort;
use crate::domain::services::Paginator;

/// Completion of a category fetch, delivered through [`LoadEvents`].
#[derive(Debug, Clone)]
pub struct CategoryLoadOutcome {
    /// Category that was fetched.
    pub category: Category,
    /// Fetched list or the retrieval failure.
    pub result: Result<Arc<[ImageRecord]>, RetrievalError>,
}

/// Receiving end for fetch completions.
///
/// The host feeds every received outcome back into
/// [`SetupController::apply_load_outcome`].
#[derive(Debug)]
pub struct LoadEvents {
    rx: mpsc::UnboundedReceiver<CategoryLoadOutcome>,
}

impl LoadEvents {
    /// Waits for the next completed fetch.
    pub async fn recv(&mut self) -> Option<CategoryLoadOutcome> {
        self.rx.recv().await
    }

    /// Returns a completed fetch if one is ready.
    pub fn try_recv(&mut self) -> Option<CategoryLoadOutcome> {
        self.rx.try_recv().ok()
    }
}

/// How a category selection was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryLoad {
    /// List served from the cache.
    Cached,
    /// New fetch started.
    Fetching,
    /// A fetch for this category was already in flight.
    Joined,
}

/// What applying a fetch outcome did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum LoadReport {
    /// List cached and displayed.
    Adopted { category: Category, count: usize },
    /// List cached for a category that is no longer active.
    CachedOnly { category: Category },
    /// Active category failed to load.
    Failed {
        category: Category,
        error: RetrievalError,
    },
    /// Inactive category failed to load; nothing changed.
    Discarded { category: Category },
}

/// Orchestrates category loading, pagination, prefetch and launch.
///
/// All transitions take `&mut self`, so the host applies them one at a time.
/// Fetches run on spawned tasks and must be driven from inside a tokio runtime.
pub struct SetupController {
    state: SetupState,
    cache: CategoryCache,
    loader: LoadCategoryUseCase,
    prefetcher: Prefetcher,
    navigator: Arc<dyn NavigationPort>,
    outcome_tx: mpsc::UnboundedSender<CategoryLoadOutcome>,
    fetches: HashMap<Category, AbortHandle>,
}

impl std::fmt::Debug for SetupController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetupController")
            .field("state", &self.state)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl SetupController {
    /// Creates a controller around `state` and an injected `cache`.
    ///
    /// Nothing is fetched until [`Self::open`] or [`Self::select_category`].
    #[must_use]
    pub fn new(
        state: SetupState,
        cache: CategoryCache,
        loader: LoadCategoryUseCase,
        prefetcher: Prefetcher,
        navigator: Arc<dyn NavigationPort>,
    ) -> (Self, LoadEvents) {
        let (outcome_tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            state,
            cache,
            loader,
            prefetcher,
            navigator,
            outcome_tx,
            fetches: HashMap::new(),
        };
        (controller, LoadEvents { rx })
    }

    /// Current screen state.
    #[must_use]
    pub const fn state(&self) -> &SetupState {
        &self.state
    }

    /// Category list cache.
    #[must_use]
    pub const fn cache(&self) -> &CategoryCache {
        &self.cache
    }

    /// Loads the initial category.
    pub fn open(&mut self) -> CategoryLoad {
        self.select_category(self.state.active_category)
    }

    /// Switches the gallery to `category`.
    ///
    /// Clears the selection and returns to the first page before loading.
    pub fn select_category(&mut self, category: Category) -> CategoryLoad {
        debug!(category = %category, "Selecting category");
        self.state.active_category = category;
        self.state.selected_image = None;
        self.state.page = 0;
        self.state.last_error = None;
        self.load_category(category)
    }

    /// Drops every cached list and reloads the active category.
    pub fn refresh(&mut self) -> CategoryLoad {
        self.cache.clear();
        self.select_category(self.state.active_category)
    }

    fn load_category(&mut self, category: Category) -> CategoryLoad {
        if let Some(images) = self.cache.get(category) {
            debug!(category = %category, "Category cache hit");
            self.state.loading = false;
            self.adopt(category, images);
            return CategoryLoad::Cached;
        }

        self.state.loading = true;

        if !self.cache.begin_fetch(category) {
            debug!(category = %category, "Joining in-flight fetch");
            return CategoryLoad::Joined;
        }

        let loader = self.loader.clone();
        let tx = self.outcome_tx.clone();
        let handle = tokio::spawn(async move {
            let result = loader.execute(category).await;
            let _ = tx.send(CategoryLoadOutcome { category, result });
        });
        self.fetches.insert(category, handle.abort_handle());

        CategoryLoad::Fetching
    }

    /// Applies a completed fetch.
    ///
    /// Successful lists are always cached; only the active category's outcome
    /// touches what is displayed.
    pub fn apply_load_outcome(&mut self, outcome: CategoryLoadOutcome) -> LoadReport {
        let CategoryLoadOutcome { category, result } = outcome;
        self.cache.finish_fetch(category);
        self.fetches.remove(&category);

        let is_active = category == self.state.active_category;

        match result {
            Ok(images) => {
                self.cache.put(category, images.clone());
                if is_active {
                    self.state.loading = false;
                    let count = images.len();
                    self.adopt(category, images);
                    LoadReport::Adopted { category, count }
                } else {
                    debug!(category = %category, "Cached list for inactive category");
                    LoadReport::CachedOnly { category }
                }
            }
            Err(error) => {
                if is_active {
                    warn!(category = %category, error = %error, "Category load failed");
                    self.state.loading = false;
                    self.state.last_error = Some(error.clone());
                    LoadReport::Failed { category, error }
                } else {
                    debug!(category = %category, error = %error, "Discarding stale failure");
                    LoadReport::Discarded { category }
                }
            }
        }
    }

    fn adopt(&mut self, category: Category, images: Arc<[ImageRecord]>) {
        self.state.images = images;
        self.state.images_category = Some(category);
        self.state.clamp_page();
        self.prefetch();
    }

    fn prefetch(&self) {
        if !self.state.images_are_current() {
            return;
        }
        self.prefetcher.prefetch_next_page(
            &self.state.images,
            self.state.page,
            self.state.page_size,
        );
    }

    /// Chooses a difficulty and resets the grid size to its default.
    pub fn select_difficulty(&mut self, difficulty: DifficultyLevel) -> GridSize {
        self.state.difficulty = difficulty;
        self.state.grid_size = difficulty.default_size();
        debug!(difficulty = %difficulty, grid_size = %self.state.grid_size, "Difficulty selected");
        self.state.grid_size
    }

    /// Chooses a grid size. Ignored unless allowed at the current difficulty.
    pub fn select_grid_size(&mut self, size: u32) -> bool {
        match GridSize::for_difficulty(self.state.difficulty, size) {
            Some(grid_size) => {
                self.state.grid_size = grid_size;
                true
            }
            None => {
                debug!(size, difficulty = %self.state.difficulty, "Rejected grid size");
                false
            }
        }
    }

    /// Selects the image with `image_url`.
    ///
    /// Ignored unless the URL is in the displayed list and that list belongs to
    /// the active category.
    pub fn select_image(&mut self, image_url: &str) -> bool {
        if !self.state.images_are_current() || !self.state.contains_image(image_url) {
            debug!(url = image_url, "Rejected image selection");
            return false;
        }
        self.state.selected_image = Some(image_url.to_string());
        true
    }

    /// Selects the `index`-th image of the current page.
    pub fn select_visible(&mut self, index: usize) -> bool {
        let Some(url) = self
            .state
            .visible_images()
            .get(index)
            .map(|record| record.image_url().to_string())
        else {
            return false;
        };
        self.select_image(&url)
    }

    /// Moves to `page`, clamped to the available pages.
    ///
    /// Ignored when no images are displayed or the displayed list belongs to
    /// another category.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if self.state.images.is_empty() || !self.state.images_are_current() {
            return false;
        }
        let target = Paginator::clamp_page(page, self.state.images.len(), self.state.page_size);
        if target != self.state.page {
            self.state.page = target;
            self.prefetch();
        }
        true
    }

    /// Advances one page. Returns false on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.state.has_next_page() {
            return false;
        }
        self.go_to_page(self.state.page + 1)
    }

    /// Goes back one page. Returns false on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.state.has_previous_page() {
            return false;
        }
        self.go_to_page(self.state.page - 1)
    }

    /// Launches the game with the current selection.
    ///
    /// Returns the emitted payload, or `None` when nothing is selected.
    pub fn start(&mut self) -> Option<LaunchPayload> {
        let Some(image) = self.state.selected_image.clone() else {
            debug!("Start ignored without a selected image");
            return None;
        };

        let payload = LaunchPayload::new(image, self.state.grid_size, self.state.difficulty);
        info!(
            image = %payload.image,
            grid_size = %payload.grid_size,
            difficulty = %payload.difficulty,
            "Launching puzzle"
        );
        self.navigator.launch(payload.clone());
        Some(payload)
    }

    /// Aborts in-flight fetches and queued prefetches.
    pub fn shutdown(&mut self) {
        for (category, handle) in self.fetches.drain() {
            handle.abort();
            self.cache.finish_fetch(category);
        }
        self.prefetcher.cancel();
        self.state.loading = false;
        debug!("Setup controller shut down");
    }
}

impl Drop for SetupController {
    fn drop(&mut self) {
        for handle in self.fetches.values() {
            handle.abort();
        }
    }
}
