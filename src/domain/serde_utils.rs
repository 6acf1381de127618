//! Serde utilities for catalog payloads.

use serde::de::{self, Visitor};
use serde::Deserializer;
use std::fmt;

/// Deserializes identifiers that the catalog service may emit either as JSON
/// strings or as JSON numbers, normalizing both to a `String`.
pub mod string_or_number {
    use super::{Deserializer, Visitor, de, fmt};

    /// Deserializes a string, integer or float into its textual form.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a string nor a number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrNumberVisitor;

        impl Visitor<'_> for StringOrNumberVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or number identifying an image")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_owned())
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value)
            }
        }

        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}
