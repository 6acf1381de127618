mod image_catalog_port;
mod navigation_port;
mod thumbnail_warmer_port;

pub use image_catalog_port::ImageCatalogPort;
pub use navigation_port::NavigationPort;
pub use thumbnail_warmer_port::{NoopWarmer, ThumbnailWarmerPort};
