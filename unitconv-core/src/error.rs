//! Conversion errors
//!
//! Errors are plain values returned to the immediate caller. Nothing in the
//! conversion core retries or recovers.

use thiserror::Error;
use crate::Family;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_FAMILY: &str = "UNKNOWN_FAMILY";
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Identifier is not a member of the family's unit set
    #[error("unknown {family} unit: {identifier}")]
    UnknownUnit {
        family: Family,
        identifier: String,
    },

    /// Family name is not one of length, weight, temperature, volume
    #[error("unknown unit family: {0}")]
    UnknownFamily(String),
}

impl ConversionError {
    pub fn unknown_unit(family: Family, identifier: impl Into<String>) -> Self {
        ConversionError::UnknownUnit {
            family,
            identifier: identifier.into(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            ConversionError::UnknownFamily(_) => codes::UNKNOWN_FAMILY,
        }
    }

    /// Family the offending identifier was checked against, if any
    pub fn family(&self) -> Option<Family> {
        match self {
            ConversionError::UnknownUnit { family, .. } => Some(*family),
            ConversionError::UnknownFamily(_) => None,
        }
    }
}
