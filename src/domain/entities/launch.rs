//! Payload handed to the gameplay screen.

use serde::Serialize;

use super::{DifficultyLevel, GridSize};

/// Selection carried from the setup screen into a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPayload {
    /// Full-resolution URL of the chosen image.
    pub image: String,
    /// Board side length.
    pub grid_size: GridSize,
    /// Difficulty the grid size was chosen under.
    pub difficulty: DifficultyLevel,
}

impl LaunchPayload {
    /// Creates a new payload.
    #[must_use]
    pub const fn new(image: String, grid_size: GridSize, difficulty: DifficultyLevel) -> Self {
        Self {
            image,
            grid_size,
            difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_wire_names() {
        let payload = LaunchPayload::new(
            "https://img.example/upload/cat.jpg".to_string(),
            DifficultyLevel::Hard.default_size(),
            DifficultyLevel::Hard,
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "image": "https://img.example/upload/cat.jpg",
                "gridSize": 10,
                "difficulty": "hard"
            })
        );
    }
}
