//! unitconv Units - Unit conversion for everyday quantities
//!
//! Stateless conversion between units of one family. Linear families go
//! through a base unit via a fixed scale table; temperature is an affine
//! transform through Celsius.
//!
//! Families:
//! - Length (millimeters, meters, miles, etc.; base: meters)
//! - Weight (milligrams, grams, pounds, etc.; base: grams)
//! - Temperature (Celsius, Fahrenheit, Kelvin)
//! - Volume (milliliters, liters, gallons, etc.; base: liters)
//!
//! Unit identifiers are matched exactly. Anything outside a family's set is
//! rejected with `ConversionError::UnknownUnit`.

mod table;
mod units;
mod linear;
mod temperature;
mod format;
mod conversion;
mod catalog;

pub use unitconv_core::{ConversionError, Family};
pub use table::UnitTable;
pub use units::{table_for, LENGTH, VOLUME, WEIGHT};
pub use linear::{convert_length, convert_volume, convert_weight};
pub use temperature::{convert_temperature, TemperatureUnit, FAHRENHEIT_OFFSET, KELVIN_OFFSET};
pub use format::{default_decimals, format_grouped, LINEAR_DECIMALS, MAX_DECIMALS, TEMPERATURE_DECIMALS};
pub use conversion::Conversion;
pub use catalog::{catalog, family_info, tips, units, FamilyInfo};

/// Convert `value` between two units of `family`
pub fn convert(family: Family, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    tracing::debug!(%family, from, to, "convert");
    match family {
        Family::Length => convert_length(value, from, to),
        Family::Weight => convert_weight(value, from, to),
        Family::Temperature => convert_temperature(value, from, to),
        Family::Volume => convert_volume(value, from, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` with a subscriber that only records WARN and above
    fn warnings_during(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    #[test]
    fn test_rejected_identifiers_are_logged_as_warnings() {
        let logs = warnings_during(|| {
            assert!(convert(Family::Length, 1.0, "furlongs", "meters").is_err());
            assert!(convert(Family::Temperature, 1.0, "Celsius", "Rankine").is_err());
        });
        assert!(logs.contains("WARN"), "{}", logs);
        assert!(logs.contains("furlongs"), "{}", logs);
        assert!(logs.contains("Rankine"), "{}", logs);
    }

    #[test]
    fn test_accepted_identifiers_log_no_warnings() {
        let logs = warnings_during(|| {
            assert!(convert(Family::Volume, 1.0, "cups", "pints").is_ok());
        });
        assert!(logs.is_empty(), "{}", logs);
    }

    #[test]
    fn test_dispatch_by_family() {
        assert_eq!(convert(Family::Length, 1.0, "kilometers", "meters").unwrap(), 1000.0);
        assert_eq!(convert(Family::Temperature, 100.0, "Celsius", "Fahrenheit").unwrap(), 212.0);
        assert_eq!(convert(Family::Volume, 1.0, "gallons", "liters").unwrap(), 3.78541);
        let pounds = convert(Family::Weight, 1.0, "kilograms", "pounds").unwrap();
        assert!((pounds - 2.20462).abs() < 1e-5);
    }

    #[test]
    fn test_every_family_rejects_foreign_units() {
        for family in Family::ALL {
            let err = convert(family, 1.0, "parsecs", "parsecs").unwrap_err();
            assert_eq!(err, ConversionError::unknown_unit(family, "parsecs"));
        }
    }

    #[test]
    fn test_every_listed_unit_is_accepted() {
        for family in Family::ALL {
            let listed = units(family);
            for from in &listed {
                for to in &listed {
                    assert!(convert(family, 1.0, from, to).is_ok(), "{} {} {}", family, from, to);
                }
            }
        }
    }
}
