//! Length, weight and volume conversions

use unitconv_core::ConversionError;
use crate::units::{LENGTH, VOLUME, WEIGHT};

/// Convert a length, e.g. `convert_length(1.0, "kilometers", "meters")`
pub fn convert_length(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    LENGTH.convert(value, from, to)
}

/// Convert a weight, e.g. `convert_weight(1.0, "kilograms", "pounds")`
pub fn convert_weight(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    WEIGHT.convert(value, from, to)
}

/// Convert a volume, e.g. `convert_volume(1.0, "gallons", "liters")`
pub fn convert_volume(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    VOLUME.convert(value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv_core::Family;
    use crate::UnitTable;

    fn tables() -> [&'static UnitTable; 3] {
        [&LENGTH, &WEIGHT, &VOLUME]
    }

    const SAMPLES: [f64; 6] = [1.0, -2.5, 0.125, 42.0, 1.0e-6, 9.87654321e8];

    fn approx_eq(a: f64, b: f64, rel: f64) -> bool {
        if a == b {
            return true;
        }
        (a - b).abs() <= rel * a.abs().max(b.abs())
    }

    #[test]
    fn test_known_lengths() {
        assert_eq!(convert_length(1.0, "kilometers", "meters").unwrap(), 1000.0);
        assert!(approx_eq(convert_length(1.0, "miles", "meters").unwrap(), 1609.34, 1e-12));
        assert!(approx_eq(convert_length(12.0, "inches", "feet").unwrap(), 1.0, 1e-12));
        assert!(approx_eq(convert_length(3.0, "feet", "yards").unwrap(), 1.0, 1e-12));
    }

    #[test]
    fn test_known_weights() {
        let pounds = convert_weight(1.0, "kilograms", "pounds").unwrap();
        assert!((pounds - 2.20462).abs() < 1e-5, "{}", pounds);
        assert_eq!(convert_weight(1.0, "tons", "kilograms").unwrap(), 1000.0);
        assert!(approx_eq(convert_weight(1000.0, "milligrams", "grams").unwrap(), 1.0, 1e-12));
    }

    #[test]
    fn test_known_volumes() {
        assert!(approx_eq(convert_volume(1.0, "gallons", "liters").unwrap(), 3.78541, 1e-12));
        assert_eq!(convert_volume(1.0, "cubic_meters", "liters").unwrap(), 1000.0);
        let cups = convert_volume(1.0, "pints", "cups").unwrap();
        assert!(approx_eq(cups, 2.0, 1e-5), "{}", cups);
    }

    #[test]
    fn test_identity_is_exact() {
        for table in tables() {
            for unit in table.identifiers() {
                for v in SAMPLES {
                    assert_eq!(table.convert(v, unit, unit).unwrap(), v, "{}", unit);
                }
            }
        }
    }

    #[test]
    fn test_round_trip() {
        for table in tables() {
            for a in table.identifiers() {
                for b in table.identifiers() {
                    for v in SAMPLES {
                        let there = table.convert(v, a, b).unwrap();
                        let back = table.convert(there, b, a).unwrap();
                        assert!(approx_eq(back, v, 1e-9), "{} {} -> {} -> {}", v, a, b, back);
                    }
                }
            }
        }
    }

    #[test]
    fn test_transitivity() {
        for table in tables() {
            for a in table.identifiers() {
                for b in table.identifiers() {
                    for c in table.identifiers() {
                        let direct = table.convert(7.5, a, c).unwrap();
                        let via = table.convert(table.convert(7.5, a, b).unwrap(), b, c).unwrap();
                        assert!(approx_eq(direct, via, 1e-9), "{} -> {} -> {}", a, b, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_is_preserved() {
        for table in tables() {
            for a in table.identifiers() {
                for b in table.identifiers() {
                    assert_eq!(table.convert(0.0, a, b).unwrap(), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_unknown_units_are_rejected() {
        assert_eq!(
            convert_length(1.0, "furlongs", "meters").unwrap_err(),
            ConversionError::unknown_unit(Family::Length, "furlongs")
        );
        assert_eq!(
            convert_weight(1.0, "grams", "carats").unwrap_err(),
            ConversionError::unknown_unit(Family::Weight, "carats")
        );
        assert_eq!(
            convert_volume(1.0, "Liters", "gallons").unwrap_err(),
            ConversionError::unknown_unit(Family::Volume, "Liters")
        );
    }

    #[test]
    fn test_units_from_other_families_are_rejected() {
        assert!(convert_length(1.0, "grams", "meters").is_err());
        assert!(convert_weight(1.0, "liters", "grams").is_err());
        assert!(convert_volume(1.0, "liters", "meters").is_err());
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        assert!(convert_length(f64::NAN, "meters", "feet").unwrap().is_nan());
        assert_eq!(convert_weight(f64::INFINITY, "grams", "pounds").unwrap(), f64::INFINITY);
        assert_eq!(convert_volume(f64::NEG_INFINITY, "cups", "liters").unwrap(), f64::NEG_INFINITY);
    }
}
