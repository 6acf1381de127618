//! Category image list loading.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{Category, ImageRecord};
use crate::domain::errors::RetrievalError;
use crate::domain::ports::ImageCatalogPort;

/// Fetches a category's image list from the catalog.
#[derive(Clone)]
pub struct LoadCategoryUseCase {
    catalog: Arc<dyn ImageCatalogPort>,
}

impl LoadCategoryUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(catalog: Arc<dyn ImageCatalogPort>) -> Self {
        Self { catalog }
    }

    /// Executes one fetch for `category`.
    ///
    /// # Errors
    /// Returns error if the catalog call fails.
    pub async fn execute(&self, category: Category) -> Result<Arc<[ImageRecord]>, RetrievalError> {
        debug!(category = %category, "Fetching image list");

        let images = self.catalog.fetch(category).await.map_err(|e| {
            warn!(category = %category, error = %e, "Image list fetch failed");
            e
        })?;

        info!(category = %category, count = images.len(), "Image list loaded");

        Ok(images.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockImageCatalog, sample_images};

    #[tokio::test]
    async fn test_successful_load() {
        let catalog = Arc::new(
            MockImageCatalog::new().with_images(Category::Animals, sample_images(Category::Animals, 4)),
        );
        let use_case = LoadCategoryUseCase::new(catalog.clone());

        let images = use_case.execute(Category::Animals).await.unwrap();

        assert_eq!(images.len(), 4);
        assert_eq!(images[0].id().as_str(), "animals-0");
        assert_eq!(catalog.call_count(Category::Animals), 1);
    }

    #[tokio::test]
    async fn test_failed_load() {
        let catalog = Arc::new(
            MockImageCatalog::new()
                .with_failure(Category::Nature, RetrievalError::status(500, "http://api")),
        );
        let use_case = LoadCategoryUseCase::new(catalog);

        let result = use_case.execute(Category::Nature).await;

        tokio_test::assert_err!(&result);
        assert_eq!(result.unwrap_err().status_code(), Some(500));
    }
}
