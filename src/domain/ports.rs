use crate::domain::model::{Magnitude, NumeralSystem};
use crate::utils::error::ConversionError;

/// Validate, decode and encode for a single numeral system.
pub trait Codec: Send + Sync {
    fn system(&self) -> NumeralSystem;

    fn validate(&self, raw: &str) -> Result<(), ConversionError>;

    fn decode(&self, raw: &str) -> Result<Magnitude, ConversionError>;

    fn encode(&self, magnitude: Magnitude) -> Result<String, ConversionError>;
}
