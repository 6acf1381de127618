//! Puzzle setup - choose an image, a difficulty and a grid size for a
//! sliding-tile puzzle.
//!
//! The crate fetches per-category image galleries from a remote service,
//! caches them for the session, pages through them and warms the next
//! page's thumbnails, then hands the final selection to the game.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the setup controller and use cases.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing the text shell.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "puzzle-setup";
