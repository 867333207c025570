//! Family catalog - display metadata for each quantity family

use serde::Serialize;
use unitconv_core::Family;
use crate::units::table_for;
use crate::TemperatureUnit;

/// Display metadata for a family: its heading, units and default inputs
#[derive(Debug, Clone, Serialize)]
pub struct FamilyInfo {
    pub family: Family,
    pub header: &'static str,
    pub units: Vec<&'static str>,
    pub default_value: f64,
    pub default_from: &'static str,
    pub default_to: &'static str,
}

static TIPS: [&str; 4] = [
    "Length: Common conversions include meters to feet, kilometers to miles",
    "Weight: Remember that 1 kg = 2.205 pounds approximately",
    "Temperature: Water freezes at 0°C (32°F) and boils at 100°C (212°F)",
    "Volume: 1 liter = 1000 milliliters = 0.264 gallons (US)",
];

/// Metadata for one family
pub fn family_info(family: Family) -> FamilyInfo {
    let units = units(family);
    let default_from = units[0];
    let (header, default_value, default_to) = match family {
        Family::Length => ("Length Conversion", 1.0, "meters"),
        Family::Weight => ("Weight Conversion", 1.0, "kilograms"),
        Family::Temperature => ("Temperature Conversion", 0.0, "Fahrenheit"),
        Family::Volume => ("Volume Conversion", 1.0, "liters"),
    };

    FamilyInfo {
        family,
        header,
        units,
        default_value,
        default_from,
        default_to,
    }
}

/// Metadata for every family, in display order
pub fn catalog() -> Vec<FamilyInfo> {
    Family::ALL.into_iter().map(family_info).collect()
}

/// Unit identifiers of a family, in display order
pub fn units(family: Family) -> Vec<&'static str> {
    match table_for(family) {
        Some(table) => table.identifiers().collect(),
        None => TemperatureUnit::ALL.iter().map(|u| u.as_str()).collect(),
    }
}

/// Short reminders of everyday equivalences
pub fn tips() -> &'static [&'static str] {
    &TIPS
}
