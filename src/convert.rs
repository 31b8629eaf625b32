//! Numeric decomposition, rounding and band scaling
//!
//! These are the arithmetic halves of the conversion: splitting a float
//! into normalized mantissa and exponent, rounding to three significant
//! digits, and scaling a mantissa back up by a band's power of ten.

use crate::types::{Band, ConvertError};

type Result<T> = std::result::Result<T, ConvertError>;

/// Split a finite float into a signed mantissa in ±[1, 10) and a power of
/// ten, so that `value == mantissa * 10^exponent`
///
/// Zero decomposes to `(0.0, 0)`. Non-finite inputs are outside the
/// contract; callers must pass finite values.
///
/// # Examples
/// ```
/// use eng_notation::decompose;
///
/// assert_eq!(decompose(0.123), (1.23, -1));
/// assert_eq!(decompose(-1230.0), (-1.23, 3));
/// ```
pub fn decompose(value: f64) -> (f64, i32) {
    if value == 0.0 {
        return (0.0, 0);
    }

    let mut exponent = value.abs().log10().floor() as i32;
    let mut mantissa = value / 10f64.powi(exponent);

    // log10 can land one step off right at a power of ten
    if mantissa.abs() >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    } else if mantissa.abs() < 1.0 {
        mantissa *= 10.0;
        exponent -= 1;
    }

    (mantissa, exponent)
}

/// Round a float to three significant digits, returning the rounded
/// mantissa and its exponent
///
/// Rounding is half-up on the fourth digit, away from zero. A carry out of
/// the leading digit re-normalizes into the exponent: 9.995 rounds to
/// `(1.0, 1)`, not to a four-digit mantissa.
///
/// # Examples
/// ```
/// use eng_notation::round_to_3;
///
/// assert_eq!(round_to_3(6.325), (6.33, 0));
/// assert_eq!(round_to_3(9.995), (1.0, 1));
/// ```
pub fn round_to_3(value: f64) -> (f64, i32) {
    let (mantissa, mut exponent) = decompose(value);

    // Settle the binary value on its nearest 11-digit decimal first, so a
    // literal like 9.995 (stored just below its decimal spelling) still
    // carries half up at the third digit.
    let scaled = (mantissa * 1e10).round();
    let mut rounded = (scaled / 1e8).round() / 100.0;

    if rounded.abs() >= 10.0 {
        rounded /= 10.0;
        exponent += 1;
    }

    (rounded, exponent)
}

/// Scale a mantissa into a metric band: `from_band(1.23456, Band::Kilo)`
/// is 1.23456e3
///
/// The mantissa may be any finite float; it is normalized first, so
/// `from_band(632.5, Band::Nano)` is 6.325e-7.
///
/// # Examples
/// ```
/// use eng_notation::convert::from_band;
/// use eng_notation::types::Band;
///
/// assert_eq!(from_band(632.5, Band::Nano), 6.325e-07);
/// assert_eq!(from_band(-632.5, Band::Kilo), -632500.0);
/// ```
pub fn from_band(mantissa: f64, band: Band) -> f64 {
    from_exponent(mantissa, band.exponent())
}

/// Scale a mantissa by the band at `index` in the band table
///
/// # Errors
/// Returns `ConvertError::OutOfRangeBand` when `index` is not in 0..=16.
pub fn from_index(mantissa: f64, index: usize) -> Result<f64> {
    let band = Band::from_index(index).ok_or(ConvertError::OutOfRangeBand(index))?;
    Ok(from_band(mantissa, band))
}

/// Scale a mantissa by an arbitrary power of ten
///
/// Unlike `from_index` this carries no range restriction; it is plain
/// arithmetic and succeeds for any finite input.
pub fn from_exponent(mantissa: f64, exponent: i32) -> f64 {
    let (m, e) = decompose(mantissa);
    m * 10f64.powi(e + exponent)
}
