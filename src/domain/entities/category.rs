//! Image categories offered on the setup screen.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Thematic bucket of catalog images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Animals.
    #[default]
    Animals,
    /// Landscapes and plants.
    Nature,
    /// Cities and landmarks.
    Places,
    /// Everyday objects.
    Objects,
    /// Abstract art.
    Abstract,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Animals,
        Self::Nature,
        Self::Places,
        Self::Objects,
        Self::Abstract,
    ];

    /// Returns the lowercase name used on the wire and in the UI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Animals => "animals",
            Self::Nature => "nature",
            Self::Places => "places",
            Self::Objects => "objects",
            Self::Abstract => "abstract",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_animals() {
        assert_eq!(Category::default(), Category::Animals);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Nature".parse::<Category>(), Ok(Category::Nature));
        assert_eq!(" ABSTRACT ".parse::<Category>(), Ok(Category::Abstract));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "vehicles".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: vehicles");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }
}
