//! Unit definitions for the linear families

use unitconv_core::Family;
use crate::UnitTable;

/// Length units, base: meters
pub static LENGTH: UnitTable = UnitTable::new(
    Family::Length,
    "meters",
    &[
        ("millimeters", 0.001),
        ("centimeters", 0.01),
        ("meters", 1.0),
        ("kilometers", 1000.0),
        ("inches", 0.0254),
        ("feet", 0.3048),
        ("yards", 0.9144),
        ("miles", 1609.34),
    ],
);

/// Weight units, base: grams
pub static WEIGHT: UnitTable = UnitTable::new(
    Family::Weight,
    "grams",
    &[
        ("milligrams", 0.001),
        ("grams", 1.0),
        ("kilograms", 1000.0),
        ("ounces", 28.3495),
        ("pounds", 453.592),
        ("stones", 6350.29),
        ("tons", 1_000_000.0),
    ],
);

/// Volume units, base: liters
pub static VOLUME: UnitTable = UnitTable::new(
    Family::Volume,
    "liters",
    &[
        ("milliliters", 0.001),
        ("liters", 1.0),
        ("cubic_meters", 1000.0),
        ("fluid_ounces", 0.0295735),
        ("cups", 0.236588),
        ("pints", 0.473176),
        ("quarts", 0.946353),
        ("gallons", 3.78541),
    ],
);

/// Table for a linear family; temperature has none
pub fn table_for(family: Family) -> Option<&'static UnitTable> {
    match family {
        Family::Length => Some(&LENGTH),
        Family::Weight => Some(&WEIGHT),
        Family::Volume => Some(&VOLUME),
        Family::Temperature => None,
    }
}
