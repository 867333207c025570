//! Temperature conversions
//!
//! Temperature scales differ by an offset as well as a factor, so they
//! cannot share the linear unit tables. Every conversion goes through
//! Celsius: normalize the input, then denormalize to the target scale.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};
use unitconv_core::{ConversionError, Family};

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// Fahrenheit reading at the freezing point of water
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// A temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// All scales, in display order
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    /// Express a reading on this scale in Celsius
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
        }
    }

    /// Express a Celsius reading on this scale
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
            TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
        }
    }

    /// Convert a reading on this scale to `target`
    pub fn convert(&self, value: f64, target: TemperatureUnit) -> f64 {
        target.from_celsius(self.to_celsius(value))
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemperatureUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| {
                warn!(identifier = s, "rejected temperature unit");
                ConversionError::unknown_unit(Family::Temperature, s)
            })
    }
}

/// Convert a temperature, e.g. `convert_temperature(100.0, "Celsius", "Fahrenheit")`
///
/// Unrecognized scale names are rejected rather than read as Celsius.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let from_unit: TemperatureUnit = from.parse()?;
    let to_unit: TemperatureUnit = to.parse()?;
    let result = from_unit.convert(value, to_unit);
    trace!(from, to, value, result, "converted temperature");
    Ok(result)
}
