//! Conversion record - a request together with its result

use std::fmt;
use serde::{Deserialize, Serialize};
use unitconv_core::{ConversionError, Family};
use crate::convert;
use crate::format::{default_decimals, format_grouped};

/// A completed conversion: `value` in `from` units equals `result` in `to` units
///
/// In JSON, non-finite numbers are written as the strings `"NaN"`, `"inf"`
/// and `"-inf"` since JSON has no number form for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub family: Family,
    #[serde(with = "non_finite")]
    pub value: f64,
    pub from: String,
    pub to: String,
    #[serde(with = "non_finite")]
    pub result: f64,
}

mod non_finite {
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(text) => match text.parse::<f64>() {
                Ok(n) if !n.is_finite() => Ok(n),
                _ => Err(de::Error::invalid_value(
                    de::Unexpected::Str(&text),
                    &"a number, \"NaN\", \"inf\" or \"-inf\"",
                )),
            },
        }
    }
}

impl Conversion {
    /// Run a conversion and keep the request alongside the result
    pub fn compute(family: Family, value: f64, from: &str, to: &str) -> Result<Self, ConversionError> {
        let result = convert(family, value, from, to)?;
        Ok(Conversion {
            family,
            value,
            from: from.to_string(),
            to: to.to_string(),
            result,
        })
    }

    /// Render as `"{value} {from} = {result} {to}"` with the given decimals.
    ///
    /// Temperatures carry a degree mark after each number.
    pub fn render(&self, decimals: usize) -> String {
        let mark = if self.family.is_linear() { "" } else { "°" };
        format!(
            "{}{} {} = {}{} {}",
            format_grouped(self.value, decimals),
            mark,
            self.from,
            format_grouped(self.result, decimals),
            mark,
            self.to,
        )
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(default_decimals(self.family)))
    }
}
