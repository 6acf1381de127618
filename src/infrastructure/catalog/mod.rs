//! Image catalog service client.

mod client;
mod dto;

pub use client::{DEFAULT_TIMEOUT, HttpImageCatalogClient};
