//! Difficulty levels and the grid sizes they allow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const EASY_SIZES: &[u32] = &[3, 4, 5, 6];
const MEDIUM_SIZES: &[u32] = &[7, 8, 9];
const HARD_SIZES: &[u32] = &[10, 11, 12];

/// Named tier constraining which grid sizes are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    /// Small boards.
    #[default]
    Easy,
    /// Medium boards.
    Medium,
    /// Large boards.
    Hard,
}

impl DifficultyLevel {
    /// All levels in display order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the grid sizes selectable at this level, smallest first.
    /// Never empty.
    #[must_use]
    pub const fn allowed_sizes(self) -> &'static [u32] {
        match self {
            Self::Easy => EASY_SIZES,
            Self::Medium => MEDIUM_SIZES,
            Self::Hard => HARD_SIZES,
        }
    }

    /// Returns the grid size selected when this level is chosen.
    #[must_use]
    pub const fn default_size(self) -> GridSize {
        GridSize(self.allowed_sizes()[0])
    }

    /// Returns true if `size` is offered at this level.
    #[must_use]
    pub fn allows(self, size: u32) -> bool {
        self.allowed_sizes().contains(&size)
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a difficulty name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty: {0}")]
pub struct UnknownDifficulty(pub String);

impl FromStr for DifficultyLevel {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownDifficulty(trimmed.to_string()))
    }
}

/// Side length N of an N×N board.
///
/// Only constructed through a [`DifficultyLevel`], so a value always belongs to
/// the allowed set of the level it was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GridSize(u32);

impl GridSize {
    /// Returns `Some` when `size` is allowed at `level`.
    #[must_use]
    pub fn for_difficulty(level: DifficultyLevel, size: u32) -> Option<Self> {
        level.allows(size).then_some(Self(size))
    }

    /// Returns the side length.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}
