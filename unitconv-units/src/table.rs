//! Unit tables with scale factors relative to a base unit

use tracing::{trace, warn};
use unitconv_core::{ConversionError, Family};

/// Fixed mapping from unit identifier to its factor relative to the
/// family's base unit (value_base = value * factor).
///
/// Entries are kept in display order.
#[derive(Debug)]
pub struct UnitTable {
    family: Family,
    base: &'static str,
    entries: &'static [(&'static str, f64)],
}

impl UnitTable {
    pub const fn new(
        family: Family,
        base: &'static str,
        entries: &'static [(&'static str, f64)],
    ) -> Self {
        UnitTable { family, base, entries }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Identifier of the unit with factor 1
    pub fn base(&self) -> &'static str {
        self.base
    }

    /// Unit identifiers in display order
    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.iter().any(|(id, _)| *id == identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the factor for a unit, failing closed on unknown identifiers
    pub fn factor(&self, identifier: &str) -> Result<f64, ConversionError> {
        self.entries
            .iter()
            .find(|(id, _)| *id == identifier)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| {
                warn!(family = %self.family, identifier, "rejected unit identifier");
                ConversionError::unknown_unit(self.family, identifier)
            })
    }

    /// Convert a value in `identifier` units to the base unit
    pub fn to_base(&self, value: f64, identifier: &str) -> Result<f64, ConversionError> {
        Ok(value * self.factor(identifier)?)
    }

    /// Convert a value in the base unit to `identifier` units
    pub fn from_base(&self, value: f64, identifier: &str) -> Result<f64, ConversionError> {
        Ok(value / self.factor(identifier)?)
    }

    /// Convert a value between two units of this table.
    ///
    /// `from` is validated before `to`, so when both are unknown the error
    /// names `from`. Converting a unit to itself returns `value` unchanged.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        let base = self.to_base(value, from)?;
        if from == to {
            return Ok(value);
        }

        let result = self.from_base(base, to)?;
        trace!(family = %self.family, from, to, value, result, "converted");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DISTANCE: UnitTable = UnitTable::new(
        Family::Length,
        "meters",
        &[("meters", 1.0), ("kilometers", 1000.0), ("centimeters", 0.01)],
    );

    #[test]
    fn test_factor_lookup() {
        assert_eq!(DISTANCE.factor("kilometers").unwrap(), 1000.0);
        assert_eq!(DISTANCE.factor("meters").unwrap(), 1.0);
    }

    #[test]
    fn test_factor_fails_closed() {
        let err = DISTANCE.factor("leagues").unwrap_err();
        assert_eq!(err, ConversionError::unknown_unit(Family::Length, "leagues"));
    }

    #[test]
    fn test_to_and_from_base() {
        assert_eq!(DISTANCE.to_base(5.0, "kilometers").unwrap(), 5000.0);
        assert_eq!(DISTANCE.from_base(5000.0, "kilometers").unwrap(), 5.0);
    }

    #[test]
    fn test_convert_matches_to_base_then_from_base() {
        for from in DISTANCE.identifiers() {
            for to in DISTANCE.identifiers() {
                let base = DISTANCE.to_base(3.5, from).unwrap();
                let expected = if from == to { 3.5 } else { DISTANCE.from_base(base, to).unwrap() };
                assert_eq!(DISTANCE.convert(3.5, from, to).unwrap(), expected, "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn test_convert_through_base() {
        assert_eq!(DISTANCE.convert(2.0, "kilometers", "centimeters").unwrap(), 200_000.0);
    }

    #[test]
    fn test_unknown_from_is_reported_before_unknown_to() {
        let err = DISTANCE.convert(1.0, "leagues", "fathoms").unwrap_err();
        assert_eq!(err, ConversionError::unknown_unit(Family::Length, "leagues"));

        let err = DISTANCE.convert(1.0, "meters", "fathoms").unwrap_err();
        assert_eq!(err, ConversionError::unknown_unit(Family::Length, "fathoms"));
    }

    #[test]
    fn test_identifiers_keep_order() {
        let ids: Vec<_> = DISTANCE.identifiers().collect();
        assert_eq!(ids, vec!["meters", "kilometers", "centimeters"]);
        assert_eq!(DISTANCE.len(), 3);
        assert!(!DISTANCE.is_empty());
        assert!(DISTANCE.contains("centimeters"));
        assert!(!DISTANCE.contains("Centimeters"));
    }
}
