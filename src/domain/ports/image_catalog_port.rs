//! Port definition for the remote image catalog.

use async_trait::async_trait;

use crate::domain::entities::{Category, ImageRecord};
use crate::domain::errors::RetrievalError;

/// Port for listing the images of a category.
///
/// One call is one round-trip; implementations do no caching of their own.
#[async_trait]
pub trait ImageCatalogPort: Send + Sync {
    /// Fetches the ordered image list for `category`.
    async fn fetch(&self, category: Category) -> Result<Vec<ImageRecord>, RetrievalError>;
}
