//! Display formatting for conversion results

use unitconv_core::Family;

/// Decimals shown for length, weight and volume results
pub const LINEAR_DECIMALS: usize = 6;

/// Decimals shown for temperature results
pub const TEMPERATURE_DECIMALS: usize = 2;

/// Most decimals an f64 can carry meaningfully; larger requests are clamped
pub const MAX_DECIMALS: usize = 17;

/// Default number of decimals for a family
pub fn default_decimals(family: Family) -> usize {
    if family.is_linear() {
        LINEAR_DECIMALS
    } else {
        TEMPERATURE_DECIMALS
    }
}

/// Format with a fixed number of decimals and `,` thousands separators.
///
/// `format_grouped(1234567.891, 2)` gives `"1,234,567.89"`. Non-finite
/// values are printed as `NaN`, `inf` and `-inf`. `decimals` is clamped
/// to `MAX_DECIMALS`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let decimals = decimals.min(MAX_DECIMALS);
    let fixed = format!("{:.*}", decimals, value);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
