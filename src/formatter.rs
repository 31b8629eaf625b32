//! Rendering floats in engineering notation
//!
//! This module rounds a value to three significant digits, places the
//! decimal point so the mantissa pairs naturally with a metric prefix, and
//! selects the band. The main entry points are `to_engineering` and
//! `components`.

use crate::convert::round_to_3;
use crate::types::{Band, Components, Suffix};

/// Format a float in engineering notation, rounded to three significant
/// digits
///
/// Values whose band exponent falls outside [-24, 24] render with an
/// explicit signed exponent instead of a prefix. The unit band has no
/// suffix at all.
///
/// # Examples
/// ```
/// use eng_notation::to_engineering;
///
/// assert_eq!(to_engineering(6.325e-07), "633n");
/// assert_eq!(to_engineering(-632500.0), "-633k");
/// assert_eq!(to_engineering(2.3456e7), "23.5M");
/// assert_eq!(to_engineering(1.0e-27), "1.00e-27");
/// ```
pub fn to_engineering(value: f64) -> String {
    components(value).to_string()
}

/// Break a float into its engineering notation components: display
/// mantissa, band exponent and suffix
///
/// The decimal point position follows the exponent residue modulo three:
/// residue 0 gives "M.MM", residue 1 "MM.M", residue 2 "MMM". The band
/// exponent is the nearest multiple of three at or below the exponent.
///
/// # Examples
/// ```
/// use eng_notation::{components, Band, Suffix};
///
/// let c = components(6.325e-07);
/// assert_eq!(c.mantissa, "633");
/// assert_eq!(c.exponent, -9);
/// assert_eq!(c.suffix, Suffix::Prefix(Band::Nano));
/// assert_eq!(c.to_string(), "633n");
/// ```
pub fn components(value: f64) -> Components {
    let (mantissa, exponent) = round_to_3(value);
    let residue = exponent.rem_euclid(3);
    let band_exponent = exponent - residue;

    // Three significant digits as an integer in 100..=999 (0 for zero).
    let digits = (mantissa.abs() * 100.0).round() as i64;
    let (d0, d1, d2) = (digits / 100, digits / 10 % 10, digits % 10);
    let sign = if mantissa < 0.0 { "-" } else { "" };

    let mantissa = match residue {
        0 => format!("{sign}{d0}.{d1}{d2}"),
        1 => format!("{sign}{d0}{d1}.{d2}"),
        _ => format!("{sign}{d0}{d1}{d2}"),
    };

    let suffix = match Band::from_exponent(band_exponent) {
        Some(band) => Suffix::Prefix(band),
        None => Suffix::Exponent(band_exponent),
    };

    Components {
        mantissa,
        exponent: band_exponent,
        suffix,
    }
}
