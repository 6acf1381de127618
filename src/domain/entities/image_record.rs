//! Catalog image entity.

/// Opaque identifier of a catalog image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(String);

impl ImageId {
    /// Creates a new `ImageId` from any string-like input.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ImageId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ImageId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A single image offered for a category, in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    id: ImageId,
    image_url: String,
}

impl ImageRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(id: impl Into<ImageId>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> &ImageId {
        &self.id
    }

    /// Returns the full-resolution image URL.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}
