//! Engineering notation string parsing
//!
//! This module parses user-entered engineering notation strings such as
//! "632.5 n" or "633k" back into floats. The main entry point is the
//! `parse_engineering` function.

mod tokens;
mod value;

pub use value::parse_engineering;
