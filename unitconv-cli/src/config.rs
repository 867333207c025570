//! Runtime configuration from environment variables
//!
//! - `UNITCONV_LOG`: default log level when `RUST_LOG` is unset (default "warn");
//!   one of off, error, warn, info, debug, trace
//! - `UNITCONV_DECIMALS`: decimals for length, weight and volume (default 6)
//! - `UNITCONV_TEMPERATURE_DECIMALS`: decimals for temperature (default 2)
//! - `UNITCONV_JSON`: "1"/"true" to print JSON instead of text

use std::env;
use tracing::level_filters::LevelFilter;
use unitconv_core::Family;
use unitconv_units::{LINEAR_DECIMALS, MAX_DECIMALS, TEMPERATURE_DECIMALS};
use crate::error::CliError;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: String,
    pub linear_decimals: usize,
    pub temperature_decimals: usize,
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            linear_decimals: LINEAR_DECIMALS,
            temperature_decimals: TEMPERATURE_DECIMALS,
            json: false,
        }
    }
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` to read variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup("UNITCONV_LOG") {
            config.log_level = parse_level("UNITCONV_LOG", &raw)?;
        }
        if let Some(raw) = lookup("UNITCONV_DECIMALS") {
            config.linear_decimals = parse_decimals("UNITCONV_DECIMALS", &raw)?;
        }
        if let Some(raw) = lookup("UNITCONV_TEMPERATURE_DECIMALS") {
            config.temperature_decimals = parse_decimals("UNITCONV_TEMPERATURE_DECIMALS", &raw)?;
        }
        if let Some(raw) = lookup("UNITCONV_JSON") {
            config.json = parse_flag("UNITCONV_JSON", &raw)?;
        }

        Ok(config)
    }

    /// Decimals to display for a family's results
    pub fn decimals_for(&self, family: Family) -> usize {
        if family.is_linear() {
            self.linear_decimals
        } else {
            self.temperature_decimals
        }
    }
}

fn parse_level(key: &str, raw: &str) -> Result<String, CliError> {
    raw.trim()
        .parse::<LevelFilter>()
        .map(|level| level.to_string())
        .map_err(|_| {
            CliError::Config(format!(
                "{} must be one of off, error, warn, info, debug, trace, got '{}'",
                key, raw
            ))
        })
}

fn parse_decimals(key: &str, raw: &str) -> Result<usize, CliError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n <= MAX_DECIMALS => Ok(n),
        _ => Err(CliError::Config(format!(
            "{} must be an integer from 0 to {}, got '{}'",
            key, MAX_DECIMALS, raw
        ))),
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, CliError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(CliError::Config(format!("{} must be a boolean, got '{}'", key, raw))),
    }
}
