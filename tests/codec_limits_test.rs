use numconv::{ConversionPolicy, ErrorKind, Magnitude, NumeralSystem, Translator};
use proptest::prelude::*;

fn translator() -> Translator {
    Translator::new(ConversionPolicy::default()).unwrap()
}

proptest! {
    #[test]
    fn roundtrip_non_negative_radix_systems(m in 0..=Magnitude::MAX) {
        let translator = translator();
        for system in [NumeralSystem::Binary, NumeralSystem::Octal, NumeralSystem::Hexadecimal, NumeralSystem::Decimal] {
            let encoded = translator.encode(system, m).unwrap();
            prop_assert_eq!(translator.decode(system, &encoded), Ok(m));
        }
    }

    #[test]
    fn roundtrip_signed_systems(m in any::<Magnitude>()) {
        let translator = translator();
        for system in [NumeralSystem::Hexadecimal, NumeralSystem::Decimal] {
            let encoded = translator.encode(system, m).unwrap();
            prop_assert_eq!(translator.decode(system, &encoded), Ok(m));
        }
    }

    #[test]
    fn roundtrip_roman(m in 1..=3999i64) {
        let translator = translator();
        let numeral = translator.encode(NumeralSystem::Roman, m).unwrap();
        prop_assert_eq!(translator.decode(NumeralSystem::Roman, &numeral), Ok(m));
        prop_assert_eq!(translator.decode(NumeralSystem::Roman, &numeral.to_lowercase()), Ok(m));
    }

    #[test]
    fn decode_is_stable_through_reencoding(raw in "0{0,5}[1-7][0-7]{0,15}") {
        let translator = translator();
        let m = translator.decode(NumeralSystem::Octal, &raw).unwrap();
        let encoded = translator.encode(NumeralSystem::Octal, m).unwrap();
        prop_assert_eq!(translator.decode(NumeralSystem::Octal, &encoded), Ok(m));
        prop_assert!(!encoded.starts_with('0'));
    }
}

#[test]
fn test_binary_overflow_boundary() {
    let translator = translator();
    assert_eq!(
        translator.decode(NumeralSystem::Binary, &"1".repeat(63)),
        Ok(Magnitude::MAX)
    );
    assert_eq!(
        translator
            .decode(NumeralSystem::Binary, &"1".repeat(64))
            .unwrap_err()
            .kind(),
        ErrorKind::Overflow
    );
}

#[test]
fn test_octal_overflow_boundary() {
    let translator = translator();
    assert_eq!(
        translator.decode(NumeralSystem::Octal, &"7".repeat(21)),
        Ok(Magnitude::MAX)
    );
    assert_eq!(
        translator
            .decode(NumeralSystem::Octal, &"7".repeat(22))
            .unwrap_err()
            .kind(),
        ErrorKind::Overflow
    );
}

#[test]
fn test_hex_overflow_boundary() {
    let translator = translator();
    assert!(translator
        .decode(NumeralSystem::Hexadecimal, &"F".repeat(15))
        .is_ok());
    assert_eq!(
        translator
            .decode(NumeralSystem::Hexadecimal, &"F".repeat(16))
            .unwrap_err()
            .kind(),
        ErrorKind::Overflow
    );
}

#[test]
fn test_roman_examples() {
    let translator = translator();
    assert_eq!(translator.decode(NumeralSystem::Roman, "MCMXCIV"), Ok(1994));
    assert_eq!(
        translator.encode(NumeralSystem::Roman, 1994).as_deref(),
        Ok("MCMXCIV")
    );
    assert_eq!(translator.decode(NumeralSystem::Roman, "IV"), Ok(4));
    assert_eq!(
        translator.encode(NumeralSystem::Roman, 0).unwrap_err().kind(),
        ErrorKind::UndefinedValue
    );
    assert_eq!(
        translator.encode(NumeralSystem::Roman, 4000).unwrap_err().kind(),
        ErrorKind::OutOfRange
    );
}

#[test]
fn test_hex_and_octal_examples() {
    let translator = translator();
    assert_eq!(translator.decode(NumeralSystem::Hexadecimal, "FF"), Ok(255));
    assert_eq!(
        translator.encode(NumeralSystem::Hexadecimal, 255).as_deref(),
        Ok("FF")
    );
    assert_eq!(
        translator
            .decode(NumeralSystem::Hexadecimal, "G1")
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidDigit
    );
    assert_eq!(translator.decode(NumeralSystem::Octal, "17"), Ok(15));
    assert_eq!(
        translator.decode(NumeralSystem::Octal, "18").unwrap_err().kind(),
        ErrorKind::InvalidDigit
    );
}
