//! Type definitions for engineering notation conversion
//!
//! This module defines the band table shared by the formatter, the parser
//! and the inverse conversions: the 17 metric bands, the tagged suffix of a
//! rendered value, and the structured form of a rendering.

use std::fmt;

/// One of the 17 metric bands, each covering three consecutive powers of
/// ten from 10^-24 (yocto) to 10^24 (yotta)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// 10^-24, "y"
    Yocto,
    /// 10^-21, "z"
    Zepto,
    /// 10^-18, "a"
    Atto,
    /// 10^-15, "f"
    Femto,
    /// 10^-12, "p"
    Pico,
    /// 10^-9, "n"
    Nano,
    /// 10^-6, "µ"
    Micro,
    /// 10^-3, "m"
    Milli,
    /// 10^0, no prefix
    Unit,
    /// 10^3, "k"
    Kilo,
    /// 10^6, "M"
    Mega,
    /// 10^9, "G"
    Giga,
    /// 10^12, "T"
    Tera,
    /// 10^15, "P"
    Peta,
    /// 10^18, "E"
    Exa,
    /// 10^21, "Z"
    Zetta,
    /// 10^24, "Y"
    Yotta,
}

impl Band {
    /// All bands, ordered from Yocto through Yotta
    pub const ALL: [Band; 17] = [
        Band::Yocto,
        Band::Zepto,
        Band::Atto,
        Band::Femto,
        Band::Pico,
        Band::Nano,
        Band::Micro,
        Band::Milli,
        Band::Unit,
        Band::Kilo,
        Band::Mega,
        Band::Giga,
        Band::Tera,
        Band::Peta,
        Band::Exa,
        Band::Zetta,
        Band::Yotta,
    ];

    /// Position in the band table, 0 (yocto) through 16 (yotta)
    pub fn index(self) -> usize {
        self as usize
    }

    /// The band's canonical power of ten, a multiple of three in [-24, 24]
    pub fn exponent(self) -> i32 {
        (self.index() as i32 - 8) * 3
    }

    /// The metric prefix symbol; the unit band is the empty string
    pub fn code(self) -> &'static str {
        match self {
            Band::Yocto => "y",
            Band::Zepto => "z",
            Band::Atto => "a",
            Band::Femto => "f",
            Band::Pico => "p",
            Band::Nano => "n",
            Band::Micro => "µ",
            Band::Milli => "m",
            Band::Unit => "",
            Band::Kilo => "k",
            Band::Mega => "M",
            Band::Giga => "G",
            Band::Tera => "T",
            Band::Peta => "P",
            Band::Exa => "E",
            Band::Zetta => "Z",
            Band::Yotta => "Y",
        }
    }

    /// Look up a band by its table position
    pub fn from_index(index: usize) -> Option<Band> {
        Band::ALL.get(index).copied()
    }

    /// Look up a band by its canonical exponent, which must be a multiple
    /// of three in [-24, 24]
    pub fn from_exponent(exponent: i32) -> Option<Band> {
        if exponent % 3 != 0 || !(-24..=24).contains(&exponent) {
            return None;
        }
        Band::from_index((exponent / 3 + 8) as usize)
    }

    /// The band whose three-exponent span covers `exponent` (exponents 0
    /// through 2 are the unit band, 3 through 5 kilo, and so on), or `None`
    /// outside [-24, 24]
    pub fn containing(exponent: i32) -> Option<Band> {
        if !(-24..=24).contains(&exponent) {
            return None;
        }
        Band::from_index((exponent.div_euclid(3) + 8) as usize)
    }

    /// Look up a band by prefix symbol; accepts "u" as an alias for micro
    /// and both "" and " " for the unit band
    pub fn from_code(code: &str) -> Option<Band> {
        match code {
            "y" => Some(Band::Yocto),
            "z" => Some(Band::Zepto),
            "a" => Some(Band::Atto),
            "f" => Some(Band::Femto),
            "p" => Some(Band::Pico),
            "n" => Some(Band::Nano),
            "µ" | "u" => Some(Band::Micro),
            "m" => Some(Band::Milli),
            "" | " " => Some(Band::Unit),
            "k" => Some(Band::Kilo),
            "M" => Some(Band::Mega),
            "G" => Some(Band::Giga),
            "T" => Some(Band::Tera),
            "P" => Some(Band::Peta),
            "E" => Some(Band::Exa),
            "Z" => Some(Band::Zetta),
            "Y" => Some(Band::Yotta),
            _ => None,
        }
    }
}

/// The suffix of a rendered value: a metric prefix inside the supported
/// range, or an explicit signed exponent outside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// The value's band exponent lies in [-24, 24]
    Prefix(Band),
    /// The value's band exponent lies outside [-24, 24]; rendered as
    /// "e<exponent>" with an explicit sign
    Exponent(i32),
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suffix::Prefix(band) => f.write_str(band.code()),
            Suffix::Exponent(exponent) => write!(f, "e{exponent:+}"),
        }
    }
}

/// The separated pieces of an engineering notation rendering, for callers
/// that reformat (insert a separator, append a unit symbol) without
/// re-deriving the band
#[derive(Debug, Clone, PartialEq)]
pub struct Components {
    /// Display mantissa with three significant digits: "M.MM", "MM.M" or
    /// "MMM" depending on the exponent residue, sign included
    pub mantissa: String,
    /// Power of ten the display mantissa is scaled by (the band exponent,
    /// a multiple of three)
    pub exponent: i32,
    /// Metric prefix, or the explicit-exponent fallback
    pub suffix: Suffix,
}

impl Components {
    /// The metric band, when the value fell inside the supported range
    pub fn band(&self) -> Option<Band> {
        match self.suffix {
            Suffix::Prefix(band) => Some(band),
            Suffix::Exponent(_) => None,
        }
    }

    /// The band's table position, when the value fell inside the supported
    /// range
    pub fn band_index(&self) -> Option<usize> {
        self.band().map(Band::index)
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.mantissa, self.suffix)
    }
}

/// Error type for band-indexed conversions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The requested band index lies outside the band table
    OutOfRangeBand(usize),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::OutOfRangeBand(index) => {
                write!(f, "Band index out of range: {} (expected 0..=16)", index)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// The prefix symbol for the band covering `exponent`, or an empty string
/// when `exponent` lies outside [-24, 24]
///
/// Note the unit band's own symbol is also empty; `Band::containing`
/// distinguishes the two cases.
///
/// # Examples
/// ```
/// use eng_notation::band_code_for_exponent;
///
/// assert_eq!(band_code_for_exponent(3), "k");
/// assert_eq!(band_code_for_exponent(-9), "n");
/// assert_eq!(band_code_for_exponent(27), "");
/// ```
pub fn band_code_for_exponent(exponent: i32) -> &'static str {
    Band::containing(exponent).map_or("", Band::code)
}
