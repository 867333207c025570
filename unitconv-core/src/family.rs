//! Quantity families

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::ConversionError;

/// A family of units that can be converted into one another.
///
/// Conversions never cross families: a length can only become another
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Length,
    Weight,
    Temperature,
    Volume,
}

impl Family {
    /// All families, in display order
    pub const ALL: [Family; 4] = [
        Family::Length,
        Family::Weight,
        Family::Temperature,
        Family::Volume,
    ];

    /// Lowercase identifier (e.g., "length")
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Length => "length",
            Family::Weight => "weight",
            Family::Temperature => "temperature",
            Family::Volume => "volume",
        }
    }

    /// Unit every conversion in this family passes through
    pub fn pivot_unit(&self) -> &'static str {
        match self {
            Family::Length => "meters",
            Family::Weight => "grams",
            Family::Temperature => "Celsius",
            Family::Volume => "liters",
        }
    }

    /// Whether conversions are pure scaling (no offset)
    pub fn is_linear(&self) -> bool {
        !matches!(self, Family::Temperature)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| ConversionError::UnknownFamily(s.to_string()))
    }
}
