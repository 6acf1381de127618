//! Domain layer with core entities, services and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;
/// Pure services.
pub mod services;

pub use entities::{Category, DifficultyLevel, GridSize, ImageId, ImageRecord, LaunchPayload};
pub use errors::RetrievalError;
pub use ports::{ImageCatalogPort, NavigationPort, NoopWarmer, ThumbnailWarmerPort};
pub use services::{Paginator, resolve_thumbnail_url};
