use crate::core::positional::{decode_unsigned, encode_unsigned, validate_unsigned};
use crate::domain::model::{Magnitude, NumeralSystem};
use crate::domain::ports::Codec;
use crate::utils::error::ConversionError;

/// Base 8, digits `0`-`7`, no sign.
#[derive(Debug, Clone, Copy, Default)]
pub struct OctalCodec;

impl Codec for OctalCodec {
    fn system(&self) -> NumeralSystem {
        NumeralSystem::Octal
    }

    fn validate(&self, raw: &str) -> Result<(), ConversionError> {
        validate_unsigned(NumeralSystem::Octal, 8, raw)
    }

    fn decode(&self, raw: &str) -> Result<Magnitude, ConversionError> {
        decode_unsigned(NumeralSystem::Octal, 8, raw)
    }

    fn encode(&self, magnitude: Magnitude) -> Result<String, ConversionError> {
        encode_unsigned(NumeralSystem::Octal, 8, magnitude)
    }
}
