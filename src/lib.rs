//! Conversion between floating point numbers and Engineering Notation:
//! scientific notation whose exponent is a multiple of three, labelled with
//! the standard metric prefixes ("k", "M", "n", ...).

pub mod convert;
pub mod formatter;
pub mod parser;
pub mod types;
pub mod units;

pub use convert::{decompose, from_band, from_exponent, from_index, round_to_3};
pub use formatter::{components, to_engineering};
pub use parser::parse_engineering;
pub use types::*;

#[cfg(test)]
mod tests;
