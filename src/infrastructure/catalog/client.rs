//! Image catalog HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::ImageResponse;
use crate::domain::entities::{Category, ImageRecord};
use crate::domain::errors::RetrievalError;
use crate::domain::ports::ImageCatalogPort;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Lists category images from `{base}/api/images/category/{category}`.
#[derive(Debug, Clone)]
pub struct HttpImageCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpImageCatalogClient {
    /// Creates client with the default timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, RetrievalError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates client with a custom request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RetrievalError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| RetrievalError::client(format!("failed to create HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Base URL requests are built from.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Listing URL for `category`.
    #[must_use]
    pub fn category_url(&self, category: Category) -> String {
        format!("{}/api/images/category/{}", self.base_url, category.as_str())
    }
}

#[async_trait]
impl ImageCatalogPort for HttpImageCatalogClient {
    async fn fetch(&self, category: Category) -> Result<Vec<ImageRecord>, RetrievalError> {
        let url = self.category_url(category);

        debug!(category = %category, url = %url, "Requesting image list");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach image service");
            if e.is_timeout() {
                RetrievalError::network("request timed out")
            } else if e.is_connect() {
                RetrievalError::network("failed to connect to image service")
            } else {
                RetrievalError::network(e.to_string())
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            return Err(RetrievalError::status(status.as_u16(), url));
        }

        let images: Vec<ImageResponse> = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse image list");
            RetrievalError::decode(e.to_string())
        })?;

        Ok(images.into_iter().map(ImageRecord::from).collect())
    }
}
