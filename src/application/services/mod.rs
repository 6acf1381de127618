//! Application services.

mod category_cache;
mod prefetcher;

pub use category_cache::CategoryCache;
pub use prefetcher::Prefetcher;
