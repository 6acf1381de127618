//! Pure domain services.

mod paginator;
mod thumbnail;

pub use paginator::Paginator;
pub use thumbnail::{THUMBNAIL_DIRECTIVES, UPLOAD_MARKER, resolve_thumbnail_url};
