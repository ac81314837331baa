pub mod binary;
pub mod decimal;
pub mod digits;
pub mod hexadecimal;
pub mod octal;
pub(crate) mod positional;
pub mod roman;
pub mod translator;

pub use binary::BinaryCodec;
pub use decimal::DecimalCodec;
pub use hexadecimal::HexadecimalCodec;
pub use octal::OctalCodec;
pub use roman::RomanCodec;
pub use translator::Translator;

pub use crate::domain::model::{Magnitude, NumeralSystem, TranslationRequest, TranslationResult};
pub use crate::domain::ports::Codec;
