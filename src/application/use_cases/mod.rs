//! Use case implementations.

mod load_category_use_case;

pub use load_category_use_case::LoadCategoryUseCase;
