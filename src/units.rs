//! Unit symbol support for engineering displays
//!
//! This module handles the display symbols callers pair with a rendered
//! value ("633n" + "A"): a unit-name lookup table loaded from embedded
//! TOML data, plus the abbreviation constants and angle conversion
//! factors. None of it is consulted by the core conversion logic.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Error type for unit table operations
#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// An error occurred while parsing the unit symbol data
    ParseError(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::ParseError(msg) => write!(f, "Error parsing unit symbol data: {}", msg),
        }
    }
}

impl std::error::Error for UnitError {}

type Result<T> = std::result::Result<T, UnitError>;

/// Table of unit display symbols keyed by unit name
struct UnitTable {
    symbols: HashMap<String, String>,
}

// Global singleton for the unit symbol table
static UNIT_TABLE: OnceLock<UnitTable> = OnceLock::new();

impl UnitTable {
    /// Create a new unit table from the embedded symbol data
    fn new() -> Self {
        let mut table = Self {
            symbols: HashMap::new(),
        };

        if let Err(e) = table.load_embedded_data() {
            // Just log the error and continue with an empty table
            eprintln!("Failed to load embedded unit data: {}", e);
        }

        table
    }

    /// Load the embedded symbol data from the TOML file
    fn load_embedded_data(&mut self) -> Result<()> {
        let symbols_toml = include_str!("units/symbols.toml");
        self.parse_symbols(symbols_toml)
    }

    /// Parse the unit symbol TOML data
    fn parse_symbols(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| UnitError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| UnitError::ParseError("Root is not a table".to_string()))?;

        let units = table
            .get("units")
            .and_then(|v| v.as_table())
            .ok_or_else(|| UnitError::ParseError("Missing [units] table".to_string()))?;

        for (name, value) in units {
            let symbol = value
                .as_str()
                .ok_or_else(|| UnitError::ParseError(format!("{} is not a string", name)))?;
            self.symbols.insert(name.clone(), symbol.to_string());
        }

        Ok(())
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.symbols.get(&name.to_lowercase()).map(String::as_str)
    }
}

/// Look up the display symbol for a unit name, e.g. "volt" -> "V"
///
/// Names are matched case-insensitively. Returns `None` for names the
/// table does not carry.
///
/// # Examples
/// ```
/// use eng_notation::units::unit_symbol;
///
/// assert_eq!(unit_symbol("volt"), Some("V"));
/// assert_eq!(unit_symbol("Ohm"), Some("Ω"));
/// assert_eq!(unit_symbol("parsec"), None);
/// ```
pub fn unit_symbol(name: &str) -> Option<&'static str> {
    UNIT_TABLE.get_or_init(UnitTable::new).get(name)
}

// Electronic unit abbreviations
pub const AMP: &str = "A";
pub const VOLT: &str = "V";
pub const OHM: &str = "Ω";
pub const HERTZ: &str = "Hz";
pub const FARAD: &str = "F";
pub const HENRY: &str = "H";
pub const WATT: &str = "W";
pub const RELUCTANCE: &str = "R";

// Comparison and quantity symbols
pub const ABOUT: &str = "≈";
pub const NOT_EQ: &str = "≠";
pub const ALPHA: &str = "α";
pub const BETA: &str = "β";
pub const DELTA: &str = "δ";
pub const PI_SYM: &str = "π";
pub const TAU_SYM: &str = "τ";
pub const THETA: &str = "θ";
pub const PHI: &str = "Φ";
pub const LAMBDA: &str = "λ";
pub const DEGREE: &str = "°";

// Angle conversion factors
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
pub const RAD_TO_GRAD: f64 = 200.0 / std::f64::consts::PI;
pub const GRAD_TO_RAD: f64 = std::f64::consts::PI / 200.0;
