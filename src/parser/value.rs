use winnow::Parser;
use winnow::ascii::space0;
use winnow::combinator::{alt, opt, preceded};

use crate::convert::{from_band, from_exponent};
use crate::parser::tokens::{parse_exponent_suffix, parse_mantissa, parse_prefix};
use crate::types::Suffix;

/// Parse an engineering notation string back into a float
///
/// This is the main public API entry point of this module. It accepts a
/// decimal mantissa followed by optional whitespace and an optional metric
/// prefix ("632.5 n", "633k") or explicit-exponent suffix ("1.00e-27").
/// A bare mantissa is the unit band. Surrounding whitespace is ignored;
/// anything else left over after the suffix is an error.
///
/// # Arguments
/// * `input_str` - The engineering notation string to parse
///
/// # Returns
/// * `Result<f64, String>` - The parsed value, or an error message
///
/// # Examples
/// ```
/// use eng_notation::parser::parse_engineering;
///
/// assert_eq!(parse_engineering("632.5 n").unwrap(), 6.325e-07);
/// assert_eq!(parse_engineering("-633k").unwrap(), -633000.0);
/// ```
pub fn parse_engineering(input_str: &str) -> Result<f64, String> {
    let mut input = input_str.trim();

    let make_err_msg = |e, remaining: &str| -> String {
        format!("Parse error: {e:?} at remaining input '{remaining}'")
    };

    let mantissa = parse_mantissa
        .parse_next(&mut input)
        .map_err(|e| make_err_msg(e, input))?;

    let suffix = opt(preceded(
        space0,
        alt((
            parse_exponent_suffix.map(Suffix::Exponent),
            parse_prefix.map(Suffix::Prefix),
        )),
    ))
    .parse_next(&mut input)
    .map_err(|e| make_err_msg(e, input))?;

    if !input.is_empty() {
        return Err(format!("Trailing characters: '{input}'"));
    }

    Ok(match suffix {
        Some(Suffix::Prefix(band)) => from_band(mantissa, band),
        Some(Suffix::Exponent(exponent)) => from_exponent(mantissa, exponent),
        None => mantissa,
    })
}
