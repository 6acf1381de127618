//! Application layer with the setup state machine, services and use cases.

/// Application services.
pub mod services;
/// Setup screen controller.
pub mod setup;
/// Use case implementations.
pub mod use_cases;

pub use services::{CategoryCache, Prefetcher};
pub use setup::{
    CategoryLoad, CategoryLoadOutcome, DEFAULT_PAGE_SIZE, LoadEvents, LoadReport, SetupController,
    SetupState,
};
pub use use_cases::LoadCategoryUseCase;
