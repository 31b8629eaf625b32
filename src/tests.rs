use crate::convert::*;
use crate::formatter::components;
use crate::parser::parse_engineering;
use crate::types::*;
use crate::units;

#[test]
fn test_decompose_normalizes() {
    assert_eq!(decompose(0.123), (1.23, -1));
    assert_eq!(decompose(123.0), (1.23, 2));
    assert_eq!(decompose(1230.0), (1.23, 3));
    assert_eq!(decompose(-1230.0), (-1.23, 3));
    assert_eq!(decompose(-123.0), (-1.23, 2));
    assert_eq!(decompose(-0.123), (-1.23, -1));
}

#[test]
fn test_decompose_zero() {
    assert_eq!(decompose(0.0), (0.0, 0));
}

#[test]
fn test_decompose_at_powers_of_ten() {
    assert_eq!(decompose(1.0), (1.0, 0));
    assert_eq!(decompose(10.0), (1.0, 1));
    assert_eq!(decompose(1000.0), (1.0, 3));
    assert_eq!(decompose(0.1), (1.0, -1));
    assert_eq!(decompose(0.001), (1.0, -3));
}

#[test]
fn test_decompose_invariant() {
    // The mantissa stays normalized and the pair reconstructs the input,
    // including where the binary value sits just off a power of ten.
    for &value in &[
        1e-7, 1e-6, 9.9999999, 123.456, 0.000892, 7e-23, 1e22, 6.02e23,
    ] {
        let (mantissa, exponent) = decompose(value);
        assert!(
            (1.0..10.0).contains(&mantissa.abs()),
            "mantissa {} out of range for {}",
            mantissa,
            value
        );
        let rebuilt = mantissa * 10f64.powi(exponent);
        assert!(
            ((rebuilt - value) / value).abs() < 1e-12,
            "expected {}, rebuilt {}",
            value,
            rebuilt
        );
    }
}

#[test]
fn test_round_to_three_digits() {
    assert_eq!(round_to_3(1.2344), (1.23, 0));
    assert_eq!(round_to_3(1.235), (1.24, 0));
    assert_eq!(round_to_3(-1.235), (-1.24, 0));
    assert_eq!(round_to_3(6.325), (6.33, 0));
    assert_eq!(round_to_3(0.0), (0.0, 0));
}

#[test]
fn test_round_carry_promotes_exponent() {
    assert_eq!(round_to_3(9.995), (1.0, 1));
    assert_eq!(round_to_3(-9.995), (-1.0, 1));
    assert_eq!(round_to_3(999.5), (1.0, 3));
    assert_eq!(round_to_3(0.9995), (1.0, 0));
}

#[test]
fn test_band_table() {
    for (i, band) in Band::ALL.iter().enumerate() {
        assert_eq!(band.index(), i);
        assert_eq!(band.exponent(), (i as i32 - 8) * 3);
        assert_eq!(Band::from_index(i), Some(*band));
        assert_eq!(Band::from_exponent(band.exponent()), Some(*band));
        assert_eq!(Band::containing(band.exponent()), Some(*band));
        assert_eq!(Band::from_code(band.code()), Some(*band));
    }
    assert_eq!(Band::Unit.code(), "");
    assert_eq!(Band::Micro.code(), "µ");
    assert_eq!(Band::from_index(17), None);
}

#[test]
fn test_band_lookup_edges() {
    // Exact-exponent lookup rejects non-multiples of three
    assert_eq!(Band::from_exponent(4), None);
    assert_eq!(Band::from_exponent(27), None);

    // The covering lookup floors, consistently with the formatter
    assert_eq!(Band::containing(4), Some(Band::Kilo));
    assert_eq!(Band::containing(-1), Some(Band::Milli));
    assert_eq!(Band::containing(2), Some(Band::Unit));
    assert_eq!(Band::containing(25), None);
    assert_eq!(Band::containing(-25), None);

    assert_eq!(Band::from_code("u"), Some(Band::Micro));
    assert_eq!(Band::from_code(" "), Some(Band::Unit));
    assert_eq!(Band::from_code("x"), None);
}

#[test]
fn test_band_code_for_exponent() {
    let codes = [
        "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
    ];
    for (i, code) in codes.iter().enumerate() {
        assert_eq!(band_code_for_exponent((i as i32 - 8) * 3), *code);
    }
    assert_eq!(band_code_for_exponent(27), "");
    assert_eq!(band_code_for_exponent(-27), "");
}

#[test]
fn test_components_point_placement() {
    // One pattern per exponent residue
    let unit = components(6.325);
    assert_eq!(unit.mantissa, "6.33");
    assert_eq!(unit.suffix, Suffix::Prefix(Band::Unit));

    assert_eq!(components(63.25).mantissa, "63.3");
    assert_eq!(components(632.5).mantissa, "633");

    let kilo = components(6325.0);
    assert_eq!(kilo.mantissa, "6.33");
    assert_eq!(kilo.exponent, 3);
    assert_eq!(kilo.band(), Some(Band::Kilo));
    assert_eq!(kilo.band_index(), Some(9));
}

#[test]
fn test_components_zero() {
    let zero = components(0.0);
    assert_eq!(zero.mantissa, "0.00");
    assert_eq!(zero.exponent, 0);
    assert_eq!(zero.suffix, Suffix::Prefix(Band::Unit));
    assert_eq!(zero.to_string(), "0.00");
}

#[test]
fn test_components_out_of_range() {
    let big = components(1.0e27);
    assert_eq!(big.mantissa, "1.00");
    assert_eq!(big.exponent, 27);
    assert_eq!(big.suffix, Suffix::Exponent(27));
    assert_eq!(big.band(), None);
    assert_eq!(big.to_string(), "1.00e+27");

    let small = components(6.325e-26);
    assert_eq!(small.exponent, -27);
    assert_eq!(small.to_string(), "63.3e-27");
}

#[test]
fn test_from_index_range() {
    assert_eq!(from_index(1.0, 5), Ok(from_band(1.0, Band::Nano)));
    assert_eq!(from_index(1.0, 17), Err(ConvertError::OutOfRangeBand(17)));
    assert_eq!(
        ConvertError::OutOfRangeBand(17).to_string(),
        "Band index out of range: 17 (expected 0..=16)"
    );
}

#[test]
fn test_parse_engineering_basic() {
    assert_eq!(parse_engineering("632.5 n").unwrap(), 6.325e-07);
    assert_eq!(parse_engineering("633k").unwrap(), 633000.0);
    assert_eq!(parse_engineering("-633k").unwrap(), -633000.0);
    assert_eq!(parse_engineering("123").unwrap(), 123.0);
    assert_eq!(parse_engineering(" 633k ").unwrap(), 633000.0);
}

#[test]
fn test_parse_engineering_errors() {
    assert!(parse_engineering("").is_err());
    assert!(parse_engineering("abc").is_err());
    assert!(parse_engineering("1.2.3").is_err());
    assert_eq!(
        parse_engineering("633q").unwrap_err(),
        "Trailing characters: 'q'"
    );
    assert_eq!(
        parse_engineering("633 kk").unwrap_err(),
        "Trailing characters: 'k'"
    );
}

#[test]
fn test_unit_symbols() {
    assert_eq!(units::unit_symbol("volt"), Some("V"));
    assert_eq!(units::unit_symbol("AMPERE"), Some("A"));
    assert_eq!(units::unit_symbol("ohm"), Some("Ω"));
    assert_eq!(units::unit_symbol("parsec"), None);

    assert_eq!(units::VOLT, "V");
    assert_eq!(units::HERTZ, "Hz");
    assert!((units::RAD_TO_DEG * units::DEG_TO_RAD - 1.0).abs() < 1e-15);
    assert!((units::RAD_TO_GRAD * units::GRAD_TO_RAD - 1.0).abs() < 1e-15);
}
