use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt, preceded};
use winnow::error::ErrMode;
use winnow::token::{literal, one_of};
use winnow::{ModalResult, Parser};

use crate::types::Band;

/// Parse a plain decimal mantissa, without a scientific exponent
///
/// An `e`-exponent is deliberately not part of this token: a trailing
/// "e-27" belongs to the suffix, and a trailing "E" is the exa prefix.
pub fn parse_mantissa(input: &mut &str) -> ModalResult<f64> {
    (
        opt(one_of(['+', '-'])),
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
    )
        .take()
        .parse_to()
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

// Prefix parsers are case sensitive: "m" is milli, "M" is mega.

/// Parse a prefix below the unit band ("y" through "m"); micro accepts
/// both "µ" and "u"
pub fn parse_submultiple_prefix(input: &mut &str) -> ModalResult<Band> {
    alt((
        literal("y").value(Band::Yocto),
        literal("z").value(Band::Zepto),
        literal("a").value(Band::Atto),
        literal("f").value(Band::Femto),
        literal("p").value(Band::Pico),
        literal("n").value(Band::Nano),
        literal("µ").value(Band::Micro),
        literal("u").value(Band::Micro),
        literal("m").value(Band::Milli),
    ))
    .parse_next(input)
    .map_err(ErrMode::Backtrack)
}

/// Parse a prefix above the unit band ("k" through "Y")
pub fn parse_multiple_prefix(input: &mut &str) -> ModalResult<Band> {
    alt((
        literal("k").value(Band::Kilo),
        literal("M").value(Band::Mega),
        literal("G").value(Band::Giga),
        literal("T").value(Band::Tera),
        literal("P").value(Band::Peta),
        literal("E").value(Band::Exa),
        literal("Z").value(Band::Zetta),
        literal("Y").value(Band::Yotta),
    ))
    .parse_next(input)
    .map_err(ErrMode::Backtrack)
}

/// Parse any metric prefix symbol
pub fn parse_prefix(input: &mut &str) -> ModalResult<Band> {
    alt((parse_submultiple_prefix, parse_multiple_prefix)).parse_next(input)
}

/// Parse the explicit-exponent fallback suffix, e.g. "e-27" or "e+27"
///
/// The marker is lowercase `e` only; an unsigned exponent is accepted.
pub fn parse_exponent_suffix(input: &mut &str) -> ModalResult<i32> {
    preceded(
        literal("e"),
        (opt(one_of(['+', '-'])), digit1).take().parse_to(),
    )
    .parse_next(input)
    .map_err(ErrMode::Backtrack)
}
