use serde::Deserialize;

use crate::domain::entities::ImageRecord;
use crate::domain::serde_utils::string_or_number;

/// Catalog service image entry. Extra fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    /// Image identifier, string or number on the wire.
    #[serde(with = "string_or_number")]
    pub id: String,
    /// Full-resolution image URL.
    pub image_url: String,
}

impl From<ImageResponse> for ImageRecord {
    fn from(response: ImageResponse) -> Self {
        Self::new(response.id, response.image_url)
    }
}
