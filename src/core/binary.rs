use crate::core::positional::{decode_unsigned, encode_unsigned, validate_unsigned};
use crate::domain::model::{Magnitude, NumeralSystem};
use crate::domain::ports::Codec;
use crate::utils::error::ConversionError;

/// Base 2, digits `0` and `1`, no sign.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec;

impl Codec for BinaryCodec {
    fn system(&self) -> NumeralSystem {
        NumeralSystem::Binary
    }

    fn validate(&self, raw: &str) -> Result<(), ConversionError> {
        validate_unsigned(NumeralSystem::Binary, 2, raw)
    }

    fn decode(&self, raw: &str) -> Result<Magnitude, ConversionError> {
        decode_unsigned(NumeralSystem::Binary, 2, raw)
    }

    fn encode(&self, magnitude: Magnitude) -> Result<String, ConversionError> {
        encode_unsigned(NumeralSystem::Binary, 2, magnitude)
    }
}
