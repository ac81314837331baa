use crate::core::digits::{hex_value, HEX_DIGITS};
use crate::core::positional::{accumulate, render};
use crate::domain::model::{Magnitude, NumeralSystem};
use crate::domain::ports::Codec;
use crate::utils::error::ConversionError;
use crate::utils::validation::{check_alphabet, require_non_empty};

const SYSTEM: NumeralSystem = NumeralSystem::Hexadecimal;

/// Base 16, case-insensitive digits, optional leading `-` and `0x` prefix.
#[derive(Debug, Clone, Copy)]
pub struct HexadecimalCodec {
    strip_prefix: bool,
}

impl HexadecimalCodec {
    pub fn new(strip_prefix: bool) -> Self {
        Self { strip_prefix }
    }

    /// Splits off the sign and prefix, returning `(negative, digits_offset)`.
    fn split(&self, raw: &str) -> Result<(bool, usize), ConversionError> {
        require_non_empty(SYSTEM, raw)?;

        let negative = raw.starts_with('-');
        let mut offset = usize::from(negative);
        if self.strip_prefix {
            let rest = &raw[offset..];
            if rest.starts_with("0x") || rest.starts_with("0X") {
                offset += 2;
            }
        }

        if offset == raw.len() {
            return Err(ConversionError::InvalidGrammar {
                system: SYSTEM,
                input: raw.to_string(),
            });
        }
        Ok((negative, offset))
    }
}

impl Default for HexadecimalCodec {
    fn default() -> Self {
        Self::new(true)
    }
}

fn digit_value(c: char) -> Option<u32> {
    hex_value(c.to_ascii_uppercase())
}

impl Codec for HexadecimalCodec {
    fn system(&self) -> NumeralSystem {
        SYSTEM
    }

    fn validate(&self, raw: &str) -> Result<(), ConversionError> {
        let (_, offset) = self.split(raw)?;
        check_alphabet(SYSTEM, &raw[offset..], |c| digit_value(c).is_some()).map_err(|e| match e {
            ConversionError::InvalidDigit {
                system,
                digit,
                position,
            } => ConversionError::InvalidDigit {
                system,
                digit,
                position: position + offset,
            },
            other => other,
        })
    }

    fn decode(&self, raw: &str) -> Result<Magnitude, ConversionError> {
        let (negative, offset) = self.split(raw)?;
        accumulate(SYSTEM, 16, raw, offset, negative, digit_value)
    }

    fn encode(&self, magnitude: Magnitude) -> Result<String, ConversionError> {
        Ok(render(magnitude, 16, &HEX_DIGITS))
    }
}
