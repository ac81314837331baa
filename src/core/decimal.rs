use crate::domain::model::{Magnitude, NumeralSystem};
use crate::domain::ports::Codec;
use crate::utils::error::ConversionError;
use crate::utils::validation::require_non_empty;
use std::num::IntErrorKind;

const SYSTEM: NumeralSystem = NumeralSystem::Decimal;

/// Base 10 with an optional leading `+` or `-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalCodec;

impl Codec for DecimalCodec {
    fn system(&self) -> NumeralSystem {
        SYSTEM
    }

    fn validate(&self, raw: &str) -> Result<(), ConversionError> {
        require_non_empty(SYSTEM, raw)?;

        let signed = raw.starts_with(['+', '-']);
        let digits = &raw[usize::from(signed)..];
        if digits.is_empty() {
            return Err(ConversionError::InvalidGrammar {
                system: SYSTEM,
                input: raw.to_string(),
            });
        }

        match digits.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
            Some((i, digit)) => Err(ConversionError::InvalidDigit {
                system: SYSTEM,
                digit,
                position: i + usize::from(signed),
            }),
            None => Ok(()),
        }
    }

    fn decode(&self, raw: &str) -> Result<Magnitude, ConversionError> {
        self.validate(raw)?;
        raw.parse::<Magnitude>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConversionError::Overflow {
                system: SYSTEM,
                input: raw.to_string(),
            },
            _ => ConversionError::InvalidGrammar {
                system: SYSTEM,
                input: raw.to_string(),
            },
        })
    }

    fn encode(&self, magnitude: Magnitude) -> Result<String, ConversionError> {
        Ok(magnitude.to_string())
    }
}
