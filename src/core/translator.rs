use crate::core::{BinaryCodec, DecimalCodec, HexadecimalCodec, OctalCodec, RomanCodec};
use crate::domain::model::{
    ConversionPolicy, Magnitude, NumeralSystem, TranslationRequest, TranslationResult,
};
use crate::domain::ports::Codec;
use crate::utils::error::{ConversionError, NumconvError};
use crate::utils::validation::Validate;

/// Routes a numeral through the codec of its system and out through the codec
/// of every requested output system.
///
/// Holds no state beyond its codecs, so one instance can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct Translator {
    policy: ConversionPolicy,
    binary: BinaryCodec,
    octal: OctalCodec,
    decimal: DecimalCodec,
    hexadecimal: HexadecimalCodec,
    roman: RomanCodec,
}

impl Translator {
    /// Fails when the policy is out of range, e.g. a Roman ceiling of 0.
    pub fn new(policy: ConversionPolicy) -> Result<Self, NumconvError> {
        policy.validate()?;
        Ok(Self::from_checked_policy(policy))
    }

    fn from_checked_policy(policy: ConversionPolicy) -> Self {
        Self {
            policy,
            binary: BinaryCodec,
            octal: OctalCodec,
            decimal: DecimalCodec,
            hexadecimal: HexadecimalCodec::new(policy.strip_hex_prefix),
            roman: RomanCodec::new(policy.roman_ceiling),
        }
    }

    pub fn policy(&self) -> &ConversionPolicy {
        &self.policy
    }

    pub fn codec(&self, system: NumeralSystem) -> &dyn Codec {
        match system {
            NumeralSystem::Binary => &self.binary,
            NumeralSystem::Octal => &self.octal,
            NumeralSystem::Decimal => &self.decimal,
            NumeralSystem::Hexadecimal => &self.hexadecimal,
            NumeralSystem::Roman => &self.roman,
        }
    }

    pub fn decode(&self, system: NumeralSystem, raw: &str) -> Result<Magnitude, ConversionError> {
        let raw = if self.policy.trim_input { raw.trim() } else { raw };
        self.codec(system).decode(raw)
    }

    pub fn encode(
        &self,
        system: NumeralSystem,
        magnitude: Magnitude,
    ) -> Result<String, ConversionError> {
        self.codec(system).encode(magnitude)
    }

    /// Decodes `raw` once and encodes the result into each output system.
    ///
    /// A decode failure fails the whole call. Encode failures are recorded
    /// against their output system and the remaining outputs still run.
    pub fn translate(
        &self,
        input: NumeralSystem,
        raw: &str,
        outputs: &[NumeralSystem],
    ) -> Result<TranslationResult, ConversionError> {
        self.translate_request(&TranslationRequest::new(input, raw, outputs.iter().copied()))
    }

    pub fn translate_request(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, ConversionError> {
        let magnitude = self
            .decode(request.input, &request.raw)
            .inspect_err(|e| tracing::warn!("Decoding {} input failed: {}", request.input, e))?;
        tracing::debug!(
            "Decoded {} '{}' to {}",
            request.input,
            request.raw.trim(),
            magnitude
        );

        let mut result = TranslationResult::new(magnitude);
        for &system in request.outputs() {
            let outcome = self.encode(system, magnitude);
            match &outcome {
                Ok(value) => tracing::debug!("Encoded {} as {} '{}'", magnitude, system, value),
                Err(e) => tracing::warn!("Encoding {} as {} failed: {}", magnitude, system, e),
            }
            result.push(system, outcome);
        }

        Ok(result)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::from_checked_policy(ConversionPolicy::default())
    }
}
