use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::AppError;

/// A validated category name, used as the results subdirectory.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, or `_`
/// - Cannot escape the results root (no separators, no `.`/`..`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Validate and create a new category name.
    pub fn new(name: &str) -> Result<Self, AppError> {
        let valid = !name.is_empty()
            && name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if valid { Ok(Self(name.to_string())) } else { Err(AppError::InvalidCategory(name.into())) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CategoryName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CategoryName::new(&s).map_err(serde::de::Error::custom)
    }
}
