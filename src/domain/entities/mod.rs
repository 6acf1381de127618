//! Domain entity definitions.

mod category;
mod difficulty;
mod image_record;
mod launch;

pub use category::{Category, UnknownCategory};
pub use difficulty::{DifficultyLevel, GridSize, UnknownDifficulty};
pub use image_record::{ImageId, ImageRecord};
pub use launch::LaunchPayload;
