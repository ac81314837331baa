//! Helpers shared by the radix codecs (binary, octal, hexadecimal).

use crate::core::digits::HEX_DIGITS;
use crate::domain::model::{Magnitude, NumeralSystem};
use crate::utils::error::ConversionError;

/// Folds `raw[offset..]` most-significant digit first.
///
/// With `negative` set the accumulator walks toward `i64::MIN`, so the full
/// signed range is reachable. `raw` is kept whole so error positions and the
/// overflow message refer to what the caller typed.
pub(crate) fn accumulate(
    system: NumeralSystem,
    radix: u32,
    raw: &str,
    offset: usize,
    negative: bool,
    value_of: impl Fn(char) -> Option<u32>,
) -> Result<Magnitude, ConversionError> {
    let radix = Magnitude::from(radix);
    let mut acc: Magnitude = 0;

    for (i, c) in raw[offset..].chars().enumerate() {
        let digit = value_of(c).ok_or(ConversionError::InvalidDigit {
            system,
            digit: c,
            position: offset + i,
        })?;
        let digit = Magnitude::from(digit);

        acc = acc
            .checked_mul(radix)
            .and_then(|shifted| {
                if negative {
                    shifted.checked_sub(digit)
                } else {
                    shifted.checked_add(digit)
                }
            })
            .ok_or_else(|| ConversionError::Overflow {
                system,
                input: raw.to_string(),
            })?;
    }

    Ok(acc)
}

/// Repeated division by `radix`, prepending each remainder. Negative values get
/// a leading `-`. `table` must hold at least `radix` digits.
pub(crate) fn render(magnitude: Magnitude, radix: u32, table: &[char]) -> String {
    if magnitude == 0 {
        return "0".to_string();
    }

    let radix = u64::from(radix);
    let mut value = magnitude.unsigned_abs();
    let mut digits = Vec::new();
    while value > 0 {
        // remainder < radix <= table.len()
        digits.push(table[(value % radix) as usize]);
        value /= radix;
    }
    if magnitude < 0 {
        digits.push('-');
    }

    digits.iter().rev().collect()
}

/// Validation, decode and encode for radix systems without a sign.
pub(crate) fn decode_unsigned(
    system: NumeralSystem,
    radix: u32,
    raw: &str,
) -> Result<Magnitude, ConversionError> {
    crate::utils::validation::require_non_empty(system, raw)?;
    accumulate(system, radix, raw, 0, false, |c| c.to_digit(radix))
}

pub(crate) fn validate_unsigned(
    system: NumeralSystem,
    radix: u32,
    raw: &str,
) -> Result<(), ConversionError> {
    crate::utils::validation::require_non_empty(system, raw)?;
    crate::utils::validation::check_alphabet(system, raw, |c| c.is_digit(radix))
}

pub(crate) fn encode_unsigned(
    system: NumeralSystem,
    radix: u32,
    magnitude: Magnitude,
) -> Result<String, ConversionError> {
    if magnitude < 0 {
        return Err(ConversionError::OutOfRange {
            system,
            value: magnitude,
            min: 0,
            max: Magnitude::MAX,
        });
    }
    Ok(render(magnitude, radix, &HEX_DIGITS))
}
