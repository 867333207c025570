//! CLI errors

use serde::Serialize;
use thiserror::Error;
use unitconv_core::{codes, ConversionError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("invalid value '{0}': expected a number")]
    InvalidValue(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("expected '<family> <value> <from> <to>', got '{0}'")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Conversion(e) => e.code(),
            CliError::InvalidValue(_) | CliError::Malformed(_) => codes::INVALID_VALUE,
            CliError::Config(_) => codes::CONFIG_ERROR,
            CliError::Io(_) => codes::IO_ERROR,
            CliError::Json(_) => codes::OUTPUT_ERROR,
        }
    }

    /// Hint listing the accepted identifiers, for unknown units and families
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Conversion(ConversionError::UnknownUnit { family, .. }) => Some(format!(
                "valid {} units: {}",
                family,
                unitconv_units::units(*family).join(", ")
            )),
            CliError::Conversion(ConversionError::UnknownFamily(_)) => {
                Some("valid families: length, weight, temperature, volume".to_string())
            }
            _ => None,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code(),
            message: self.to_string(),
            suggestion: self.suggestion(),
        }
    }
}

/// Serializable form of an error for `--json` output
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({})", suggestion)?;
        }
        Ok(())
    }
}
